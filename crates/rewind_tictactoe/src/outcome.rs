//! Board evaluation: winner, winning line, draw.

use super::rules::{self, WinningLine};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a single board snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    winner: Option<Player>,
    line: Option<WinningLine>,
    is_draw: bool,
}

/// Coarse status derived from an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// The completed line, if any.
    pub fn line(&self) -> Option<WinningLine> {
        self.line
    }

    /// True when the board is full without a winner.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// True when no further moves are accepted on this board.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// Whether `pos` belongs to the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.line.is_some_and(|line| line.contains(pos))
    }

    /// Collapses the outcome into a [`GameStatus`].
    pub fn status(&self) -> GameStatus {
        match (self.winner, self.is_draw) {
            (Some(player), _) => GameStatus::Won(player),
            (None, true) => GameStatus::Draw,
            (None, false) => GameStatus::InProgress,
        }
    }
}

/// Evaluates a board.
///
/// Winning lines are checked first in fixed order; only a board without a
/// winner can be a draw, and only when every square is occupied.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((winner, line)) = rules::find_winning_line(board) {
        return Outcome {
            winner: Some(winner),
            line: Some(line),
            is_draw: false,
        };
    }

    Outcome {
        winner: None,
        line: None,
        is_draw: rules::is_full(board),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        let outcome = evaluate(&Board::new());
        assert_eq!(outcome, Outcome::default());
        assert_eq!(outcome.status(), GameStatus::InProgress);
        assert!(!outcome.is_over());
    }

    #[test]
    fn test_highlights_only_winning_line() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomRight, Player::O)
            .with_mark(Position::TopRight, Player::X);
        let outcome = evaluate(&board);

        assert_eq!(outcome.status(), GameStatus::Won(Player::O));
        assert!(outcome.highlights(Position::Center));
        assert!(!outcome.highlights(Position::TopRight));
    }
}
