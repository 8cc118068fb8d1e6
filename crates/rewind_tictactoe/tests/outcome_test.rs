//! Tests for board evaluation.

use rewind_tictactoe::rules::LINES;
use rewind_tictactoe::{Board, GameStatus, Player, Position, Square, evaluate};

fn board_from(marks: &str) -> Board {
    let mut squares = [Square::Empty; 9];
    for (square, c) in squares.iter_mut().zip(marks.chars()) {
        *square = match c {
            'X' => Square::Occupied(Player::X),
            'O' => Square::Occupied(Player::O),
            _ => Square::Empty,
        };
    }
    Board::from_squares(squares)
}

fn has_three_in_a_row(board: &Board) -> bool {
    LINES.iter().any(|line| {
        let [a, b, c] = line.positions();
        board.get(a) != Square::Empty && board.get(a) == board.get(b) && board.get(b) == board.get(c)
    })
}

#[test]
fn test_every_line_wins_for_both_players() {
    for line in LINES {
        for player in [Player::X, Player::O] {
            let board = line
                .positions()
                .iter()
                .fold(Board::new(), |b, pos| b.with_mark(*pos, player));
            let outcome = evaluate(&board);

            assert_eq!(outcome.winner(), Some(player));
            assert_eq!(outcome.line(), Some(line));
            assert!(!outcome.is_draw());
        }
    }
}

#[test]
fn test_no_winner_without_three_in_a_row() {
    // Every assignment of {empty, X, O} to the nine squares.
    for code in 0..3usize.pow(9) {
        let mut squares = [Square::Empty; 9];
        let mut rest = code;
        for square in squares.iter_mut() {
            *square = match rest % 3 {
                1 => Square::Occupied(Player::X),
                2 => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
            rest /= 3;
        }
        let board = Board::from_squares(squares);
        if has_three_in_a_row(&board) {
            continue;
        }

        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), None, "board {:?}", board);
        assert_eq!(outcome.line(), None);
        assert_eq!(outcome.is_draw(), board.filled() == 9);
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board = board_from("XOXXOOOXX");
    let outcome = evaluate(&board);

    assert!(outcome.is_draw());
    assert_eq!(outcome.winner(), None);
    assert_eq!(outcome.status(), GameStatus::Draw);
}

#[test]
fn test_full_board_with_line_is_win_not_draw() {
    let board = board_from("XXXOOXXOO");
    let outcome = evaluate(&board);

    assert_eq!(outcome.status(), GameStatus::Won(Player::X));
    assert!(!outcome.is_draw());
}

#[test]
fn test_two_lines_report_first_in_order() {
    // X X O / O . . / O X X: the center completes column 1 and the main
    // diagonal at once; the column is earlier in evaluation order.
    let board = board_from("XXOO..OXX");
    assert_eq!(evaluate(&board).winner(), None);

    let outcome = evaluate(&board.with_mark(Position::Center, Player::X));
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(outcome.line().map(|l| l.indices()), Some([1, 4, 7]));
}
