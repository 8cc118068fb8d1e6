//! Presentation-neutral view model.
//!
//! Front ends render these values as-is: status text, move-list labels,
//! highlighted squares and the sort toggle label all come from here.

use super::history::HistoryEntry;
use super::outcome::{GameStatus, Outcome};
use super::snapshot::GameSnapshot;
use super::{Board, Player, Position, SortOrder, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveListItem {
    /// History step this item jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// True for the displayed step.
    pub selected: bool,
}

/// One square as drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// Board index (0-8) forwarded to `apply_move` on click.
    pub index: usize,
    /// Mark in the square, if any.
    pub mark: Option<Player>,
    /// Part of the winning line.
    pub highlighted: bool,
}

/// Status text for the displayed board.
pub fn status_line(outcome: &Outcome, next: Player) -> String {
    match outcome.status() {
        GameStatus::Won(winner) => format!("Winner: {}", winner),
        GameStatus::Draw => "Draw".to_string(),
        GameStatus::InProgress => format!("Next player: {}", next),
    }
}

/// Label of a move-list entry.
pub fn move_label(step: usize, entry: &HistoryEntry) -> String {
    match entry.location() {
        Some(location) if step > 0 => format!("Go to move #{} @ {}", step, location),
        _ => "Go to game start".to_string(),
    }
}

/// Builds the move list in display order.
#[instrument(skip(history), fields(len = history.len()))]
pub fn move_list(history: &[HistoryEntry], current: usize, order: SortOrder) -> Vec<MoveListItem> {
    let items = history.iter().enumerate().map(|(step, entry)| MoveListItem {
        step,
        label: move_label(step, entry),
        selected: step == current,
    });

    match order {
        SortOrder::Ascending => items.collect(),
        SortOrder::Descending => items.rev().collect(),
    }
}

/// Text for the sort toggle: the order it switches to.
pub fn sort_toggle_label(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Ascending => "descending",
        SortOrder::Descending => "ascending",
    }
}

/// All nine squares with their highlight flags.
pub fn cell_views(board: &Board, outcome: &Outcome) -> [CellView; 9] {
    Position::ALL.map(|pos| CellView {
        index: pos.to_index(),
        mark: match board.get(pos) {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        },
        highlighted: outcome.highlights(pos),
    })
}

/// A full frame derived from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// The nine squares.
    pub cells: [CellView; 9],
    /// Status text.
    pub status: String,
    /// Move list in display order.
    pub moves: Vec<MoveListItem>,
    /// Sort toggle text.
    pub sort_toggle: String,
}

impl From<&GameSnapshot> for GameView {
    fn from(snapshot: &GameSnapshot) -> Self {
        Self {
            cells: cell_views(snapshot.board(), snapshot.outcome()),
            status: status_line(snapshot.outcome(), *snapshot.next_player()),
            moves: move_list(snapshot.history(), *snapshot.step(), *snapshot.sort_order()),
            sort_toggle: sort_toggle_label(*snapshot.sort_order()).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::evaluate;

    #[test]
    fn test_status_next_player() {
        let outcome = evaluate(&Board::new());
        assert_eq!(status_line(&outcome, Player::O), "Next player: O");
    }

    #[test]
    fn test_origin_label() {
        assert_eq!(move_label(0, &HistoryEntry::origin()), "Go to game start");
    }

    #[test]
    fn test_toggle_label_names_other_order() {
        assert_eq!(sort_toggle_label(SortOrder::Ascending), "descending");
        assert_eq!(sort_toggle_label(SortOrder::Descending), "ascending");
    }
}
