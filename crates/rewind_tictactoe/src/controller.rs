//! Game state controller: moves, time travel and change notification.

use super::action::{JumpError, Move, MoveError};
use super::contracts::{Contract, MoveContract, PositionOnBoard};
use super::events::GameEvent;
use super::history::{History, HistoryEntry};
use super::outcome::Outcome;
use super::snapshot::GameSnapshot;
use super::state::GameState;
use super::{Board, Player, Position, SortOrder};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Owns the game state and applies UI events to it.
///
/// Every accepted change sends one [`GameEvent`] to each subscriber.
/// Rejected moves change nothing and send nothing.
#[derive(Debug, Default)]
pub struct GameController {
    state: GameState,
    subscribers: Vec<mpsc::UnboundedSender<GameEvent>>,
}

impl GameController {
    /// Creates a new game with a single empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_sort(sort: SortOrder) -> Self {
        Self {
            state: GameState::with_sort(sort),
            subscribers: Vec::new(),
        }
    }

    /// Builds a game by playing `indices` in order.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &index in indices {
            game.try_apply_move(index)?;
        }
        Ok(game)
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Index of the displayed history entry.
    pub fn step(&self) -> usize {
        self.state.step()
    }

    /// The full history.
    pub fn history(&self) -> &History {
        self.state.history()
    }

    /// Player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        self.state.next_player()
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.state.x_is_next()
    }

    /// Move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.state.sort_order()
    }

    /// Evaluates the displayed board.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Squares a move may currently be played on.
    pub fn valid_moves(&self) -> Vec<Position> {
        self.state.valid_moves()
    }

    /// Copies out everything a presenter needs.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.state)
    }

    /// Registers a subscriber for change notifications.
    ///
    /// Dropping the receiver unsubscribes.
    #[instrument(skip(self), fields(subscribers = self.subscribers.len()))]
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Plays the next player's mark at `index`.
    ///
    /// Occupied squares, off-board indices and already-won boards are
    /// ignored without any state change.
    #[instrument(skip(self), fields(step = self.state.step()))]
    pub fn apply_move(&mut self, index: usize) {
        if let Err(e) = self.try_apply_move(index) {
            debug!(index, error = %e, "Ignoring move");
        }
    }

    /// Plays the next player's mark at `index`, reporting why a move is
    /// rejected.
    ///
    /// Entries after the current step are discarded before the new entry
    /// is appended.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index > 8`
    /// - [`MoveError::GameOver`] if the displayed board has a winner
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(step = self.state.step()))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<&HistoryEntry, MoveError> {
        let position = PositionOnBoard::check(index)?;
        let action = Move::new(self.state.next_player(), position);

        MoveContract::pre(&self.state, &action)?;

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let entry = HistoryEntry::after(self.state.board(), action);
        self.state.branch(entry);

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(&before, &self.state) {
                self.state = before;
                return Err(e);
            }
        }

        let step = self.state.step();
        info!(step, mov = %action, location = %position.location(), "Move played");
        self.notify(GameEvent::MovePlayed { step, mov: action });

        Ok(self.state.history().latest())
    }

    /// Displays history entry `step` without changing stored entries.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::StepOutOfRange`] and leaves state unchanged
    /// when `step` is not a history index.
    #[instrument(skip(self), fields(len = self.state.history().len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        let len = self.state.history().len();
        if step >= len {
            debug!(step, len, "Rejecting jump");
            return Err(JumpError::StepOutOfRange { step, len });
        }

        self.state.set_step(step);
        info!(step, next = %self.state.next_player(), "Jumped");
        self.notify(GameEvent::Jumped { step });
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.state.toggle_sort();
        let order = self.state.sort_order();
        debug!(%order, "Sort order toggled");
        self.notify(GameEvent::SortToggled(order));
    }

    /// Discards all moves and shows the empty board.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.state.reset();
        info!("Game restarted");
        self.notify(GameEvent::Restarted);
    }

    fn notify(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event).is_ok());
        debug!(?event, subscribers = self.subscribers.len(), "Notified subscribers");
    }
}
