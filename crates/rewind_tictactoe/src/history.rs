//! Move history: one board snapshot per step.

use super::action::{Move, StateError};
use super::position::Location;
use super::Board;
use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, instrument};

/// A board snapshot plus the move that produced it.
///
/// The initial entry has no move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// The move that produced this board.
    #[getter(skip)]
    mov: Option<Move>,
}

impl HistoryEntry {
    /// The initial entry: an empty board.
    pub fn origin() -> Self {
        Self {
            board: Board::new(),
            mov: None,
        }
    }

    /// Entry produced by `mov` on top of `previous`.
    pub fn after(previous: &Board, mov: Move) -> Self {
        Self {
            board: previous.with_mark(mov.position, mov.player),
            mov: Some(mov),
        }
    }

    /// The move that produced this entry.
    pub fn mov(&self) -> Option<Move> {
        self.mov
    }

    /// Where the move was played, `None` for the initial entry.
    pub fn location(&self) -> Option<Location> {
        self.mov.map(|m| m.position.location())
    }
}

/// Ordered sequence of history entries, never empty.
///
/// Deserializing rejects an empty entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

/// Wire shape of [`History`] before validation.
#[derive(Deserialize)]
struct RawHistory {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the initial empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::origin()],
        }
    }

    /// Wraps stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::EmptyHistory`] if `entries` is empty.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Result<Self, StateError> {
        if entries.is_empty() {
            return Err(StateError::EmptyHistory);
        }
        Ok(Self { entries })
    }

    /// Number of entries (always at least one).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// The most recent entry.
    pub fn latest(&self) -> &HistoryEntry {
        // `entries` always holds the origin.
        &self.entries[self.entries.len() - 1]
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Drops every entry after `step` and appends `entry`.
    ///
    /// Returns the step of the appended entry.
    #[instrument(skip(self, entry), fields(len = self.entries.len()))]
    pub fn branch(&mut self, step: usize, entry: HistoryEntry) -> usize {
        let keep = (step + 1).min(self.entries.len());
        if keep < self.entries.len() {
            debug!(discarded = self.entries.len() - keep, "Discarding future entries");
        }
        self.entries.truncate(keep);
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Resets to the initial entry only.
    pub fn clear(&mut self) {
        self.entries.truncate(1);
    }

    #[cfg(test)]
    pub(crate) fn entries_mut(&mut self) -> &mut Vec<HistoryEntry> {
        &mut self.entries
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl<'de> Deserialize<'de> for History {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawHistory::deserialize(deserializer)?;
        Self::from_entries(raw.entries).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_new_history_has_empty_origin() {
        let history = History::new();
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().board(), &Board::new());
        assert_eq!(history.latest().location(), None);
    }

    #[test]
    fn test_branch_truncates_future() {
        let mut history = History::new();
        let first = HistoryEntry::after(&Board::new(), Move::new(Player::X, Position::Center));
        history.branch(0, first);
        let second = HistoryEntry::after(first.board(), Move::new(Player::O, Position::TopLeft));
        history.branch(1, second);
        assert_eq!(history.len(), 3);

        let alt = HistoryEntry::after(&Board::new(), Move::new(Player::X, Position::BottomRight));
        let step = history.branch(0, alt);

        assert_eq!(step, 1);
        assert_eq!(history.len(), 2);
        assert_eq!(history.latest(), &alt);
    }

    #[test]
    fn test_entry_after_does_not_touch_previous() {
        let origin = HistoryEntry::origin();
        let next = HistoryEntry::after(origin.board(), Move::new(Player::X, Position::TopRight));

        assert_eq!(origin.board().filled(), 0);
        assert_eq!(next.board().filled(), 1);
        assert_eq!(next.location().map(|l| (l.row, l.column)), Some((1, 3)));
    }

    #[test]
    fn test_deserialize_rejects_empty_entries() {
        let err = serde_json::from_str::<History>(r#"{"entries":[]}"#).unwrap_err();
        assert!(err.to_string().contains("History has no entries"));
        assert_eq!(History::from_entries(Vec::new()), Err(StateError::EmptyHistory));
    }

    #[test]
    fn test_deserialize_keeps_entries() {
        let mut history = History::new();
        history.branch(0, HistoryEntry::after(&Board::new(), Move::new(Player::X, Position::Center)));

        let json = serde_json::to_string(&history).unwrap();
        let restored: History = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, history);
        assert_eq!(restored.latest().location().map(|l| (l.row, l.column)), Some((2, 2)));
    }
}
