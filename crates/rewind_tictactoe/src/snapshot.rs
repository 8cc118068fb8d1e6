//! Read-only view of the controller state for presenters.

use super::history::HistoryEntry;
use super::outcome::Outcome;
use super::state::GameState;
use super::{Board, Player, SortOrder};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a presenter needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Displayed board.
    board: Board,
    /// Displayed step.
    step: usize,
    /// Player to move on the displayed board.
    next_player: Player,
    /// Evaluation of the displayed board.
    outcome: Outcome,
    /// Move-list order.
    sort_order: SortOrder,
    /// Every history entry, oldest first.
    history: Vec<HistoryEntry>,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            board: *state.board(),
            step: state.step(),
            next_player: state.next_player(),
            outcome: state.outcome(),
            sort_order: state.sort_order(),
            history: state.history().entries().to_vec(),
        }
    }
}
