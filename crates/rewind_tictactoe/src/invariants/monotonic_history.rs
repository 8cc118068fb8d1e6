//! Monotonic history invariant: every entry adds exactly one mark.

use super::super::rules;
use super::super::state::GameState;
use super::super::{Board, Square};
use super::Invariant;

/// Invariant: the history grows one mark at a time from an empty board.
///
/// - Entry 0 is the empty board with no move.
/// - Each later entry changes exactly one square from empty to occupied,
///   and that square is the one its move names.
/// - No entry follows a board that already has a winner.
pub struct MonotonicHistoryInvariant;

fn single_mark_added(before: &Board, after: &Board) -> bool {
    let changed: Vec<_> = before
        .squares()
        .iter()
        .zip(after.squares())
        .filter(|(b, a)| b != a)
        .collect();

    matches!(changed.as_slice(), [(Square::Empty, Square::Occupied(_))])
}

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        let entries = state.history().entries();

        let Some(origin) = entries.first() else {
            return false;
        };
        if origin.board() != &Board::new() || origin.mov().is_some() {
            return false;
        }

        entries.windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(mov) = next.mov() else {
                return false;
            };
            rules::find_winning_line(prev.board()).is_none()
                && single_mark_added(prev.board(), next.board())
                && next.board().get(mov.position) == Square::Occupied(mov.player)
        })
    }

    fn description() -> &'static str {
        "History grows one mark at a time from an empty board"
    }
}
