//! Game state: history, current step and move-list order.

use super::action::StateError;
use super::history::{History, HistoryEntry};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::outcome::{self, Outcome};
use super::{Board, Player, Position, SortOrder};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{instrument, warn};

/// Complete game state.
///
/// The player to move is derived from `step`, so it can never disagree
/// with the displayed board. Deserialized state goes through
/// [`GameState::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    history: History,
    step: usize,
    sort: SortOrder,
}

#[derive(Deserialize)]
struct RawGameState {
    history: History,
    step: usize,
    sort: SortOrder,
}

impl GameState {
    /// Creates a new game with a single empty board.
    pub fn new() -> Self {
        Self::with_sort(SortOrder::default())
    }

    /// Creates a new game with the given move-list order.
    pub fn with_sort(sort: SortOrder) -> Self {
        Self {
            history: History::new(),
            step: 0,
            sort,
        }
    }

    /// Rebuilds a state from stored parts.
    ///
    /// # Errors
    ///
    /// - [`StateError::StepOutOfRange`] if `step` is not a history index
    /// - [`StateError::InvalidHistory`] if the entries break a history
    ///   invariant (wrong origin, skipped or overwritten squares, out of
    ///   turn marks, play after a win)
    #[instrument(skip(history), fields(len = history.len()))]
    pub fn from_parts(history: History, step: usize, sort: SortOrder) -> Result<Self, StateError> {
        let len = history.len();
        if step >= len {
            warn!("Rejecting stored step");
            return Err(StateError::StepOutOfRange { step, len });
        }

        let state = Self { history, step, sort };
        HistoryInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejecting stored history");
            StateError::InvalidHistory(descriptions)
        })?;
        Ok(state)
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed entry.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// The displayed history entry.
    pub fn current(&self) -> &HistoryEntry {
        // `step` is kept in bounds by every mutator.
        &self.history.entries()[self.step]
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.next_player() == Player::X
    }

    /// Evaluates the displayed board.
    pub fn outcome(&self) -> Outcome {
        outcome::evaluate(self.board())
    }

    /// Empty squares on the displayed board, or none once it is won.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.outcome().winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.board())
    }

    /// Appends `entry` after the current step, discarding later entries.
    pub(crate) fn branch(&mut self, entry: HistoryEntry) {
        self.step = self.history.branch(self.step, entry);
    }

    /// Points at `step`. Callers check bounds first.
    pub(crate) fn set_step(&mut self, step: usize) {
        self.step = step;
    }

    pub(crate) fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
    }

    pub(crate) fn reset(&mut self) {
        self.history.clear();
        self.step = 0;
    }

    #[cfg(test)]
    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de> Deserialize<'de> for GameState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawGameState::deserialize(deserializer)?;
        Self::from_parts(raw.history, raw.step, raw.sort).map_err(serde::de::Error::custom)
    }
}
