//! Tests for the interactive loop, driven from in-memory input.

use rewind_cli::run;
use rewind_tictactoe::{GameController, Player};
use std::io::Cursor;

fn session(input: &str) -> (GameController, String) {
    let mut game = GameController::new();
    let mut out = Vec::new();
    run(&mut game, Cursor::new(input), &mut out).unwrap();
    (game, String::from_utf8(out).unwrap())
}

#[test]
fn test_play_to_a_win() {
    let (game, out) = session("0\n4\n1\n3\n2\n");

    assert_eq!(game.outcome().winner(), Some(Player::X));
    assert!(out.contains("Winner: X"));
}

#[test]
fn test_ignored_move_does_not_redraw() {
    let (_, out) = session("4\n4\n");

    // Initial frame plus one redraw for the accepted move.
    assert_eq!(out.matches("---+---+---").count(), 2 * 2);
}

#[test]
fn test_time_travel_and_branch() {
    let (game, out) = session("0\n4\n1\njump 1\nmove 8\nquit\n5\n");

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.step(), 2);
    assert!(out.contains("> 2. Go to move #2 @ (3, 3)"));
}

#[test]
fn test_bad_input_reports_and_continues() {
    let (game, out) = session("fly\njump 9\nsort\n");

    assert!(out.contains("Unknown command: fly"));
    assert!(out.contains("Step 9 is out of range (history has 1 entries)"));
    assert!(out.contains("(sort: ascending)"));
    assert_eq!(game.history().len(), 1);
}
