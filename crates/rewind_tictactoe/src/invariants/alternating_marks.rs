//! Alternating marks invariant: entries alternate X, O, X, O, ...

use super::super::state::GameState;
use super::super::Player;
use super::Invariant;

/// Invariant: the move recorded at entry `k` was played by X when `k` is
/// odd and by O when `k` is even.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .all(|(k, entry)| {
                entry
                    .mov()
                    .is_some_and(|m| m.player == Player::for_step(k - 1))
            })
    }

    fn description() -> &'static str {
        "Players alternate marks (X, O, X, O, ...)"
    }
}
