//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight index triples that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` is part of this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// All winning lines in evaluation order: rows, columns, diagonals.
pub const LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinningLine([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]),
    WinningLine([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]),
    // Columns
    WinningLine([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]),
    WinningLine([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]),
    WinningLine([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]),
    // Diagonals
    WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Finds the first completed line on the board.
///
/// Lines are checked in [`LINES`] order, so when a single move completes
/// two lines the earlier one is reported.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    for line in LINES {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player().map(|player| (player, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::X)
            .with_mark(Position::TopRight, Player::X);
        assert_eq!(find_winning_line(&board), Some((Player::X, LINES[0])));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::new()
            .with_mark(Position::TopRight, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomLeft, Player::O);
        let (player, line) = find_winning_line(&board).unwrap();
        assert_eq!(player, Player::O);
        assert_eq!(line.indices(), [2, 4, 6]);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::X)
            .with_mark(Position::TopCenter, Player::O)
            .with_mark(Position::TopRight, Player::X);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_double_line_reports_first_in_order() {
        // X X X / X . . / X . . completes row 0 and column 0 at once.
        let board = [
            Position::TopLeft,
            Position::TopCenter,
            Position::TopRight,
            Position::MiddleLeft,
            Position::BottomLeft,
        ]
        .iter()
        .fold(Board::new(), |b, pos| b.with_mark(*pos, Player::X));
        assert_eq!(find_winning_line(&board), Some((Player::X, LINES[0])));
    }
}
