//! Tic-tac-toe with a move history you can travel through.
//!
//! # Architecture
//!
//! - **Outcome evaluator**: [`evaluate`] maps a [`Board`] to an [`Outcome`]
//! - **Controller**: [`GameController`] owns the history, the displayed step
//!   and the move-list order, and notifies subscribers after each change
//! - **Contracts**: move preconditions and history invariants
//! - **View model**: status text, move-list labels and highlights
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameController, Player};
//!
//! let mut game = GameController::new();
//! for index in [0, 4, 1, 3, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.outcome().winner(), Some(Player::X));
//!
//! game.jump_to(0).unwrap();
//! assert!(game.x_is_next());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod events;
mod history;
mod outcome;
mod position;
mod snapshot;
mod state;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;
pub mod view;

pub use action::{JumpError, Move, MoveError, StateError};
pub use controller::GameController;
pub use events::GameEvent;
pub use history::{History, HistoryEntry};
pub use outcome::{GameStatus, Outcome, evaluate};
pub use position::{Location, Position};
pub use rules::WinningLine;
pub use snapshot::GameSnapshot;
pub use state::GameState;
pub use types::{Board, Player, SortOrder, Square};
