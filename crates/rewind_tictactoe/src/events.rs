//! Change notifications emitted by the controller.

use super::{Move, SortOrder};
use serde::{Deserialize, Serialize};

/// Sent to every subscriber after a state change completes.
///
/// Events say what changed; subscribers re-read
/// [`GameController::snapshot`](crate::GameController::snapshot) to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A move was appended and is now displayed.
    MovePlayed {
        /// Step of the new entry.
        step: usize,
        /// The move that was played.
        mov: Move,
    },
    /// The displayed step changed.
    Jumped {
        /// Step now displayed.
        step: usize,
    },
    /// The move-list order was flipped.
    SortToggled(SortOrder),
    /// History was reset to the empty board.
    Restarted,
}
