//! Line-oriented interactive front end.

use super::presenter::{Presenter, render};
use anyhow::Result;
use derive_more::Display;
use rewind_tictactoe::GameController;
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};

const HELP: &str = "\
Commands:
  <0-8> | move <0-8>   play a square
  jump <step>          show an earlier (or later) position
  sort                 flip the move list order
  restart              clear the board
  help                 show this text
  quit                 leave";

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    /// Play the square at this index.
    Move(usize),
    /// Jump to this history step.
    Jump(usize),
    /// Toggle the move-list order.
    Sort,
    /// Clear the history.
    Restart,
    /// Print usage.
    Help,
    /// Exit the loop.
    Quit,
}

/// Why an input line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    /// The first word is not a command.
    #[display("Unknown command: {}", _0)]
    Unknown(String),
    /// A command needs a number and got none.
    #[display("`{}` needs a number", _0)]
    MissingArgument(&'static str),
    /// The argument is not a non-negative integer.
    #[display("Not a number: {}", _0)]
    InvalidNumber(String),
}

impl std::error::Error for ParseError {}

fn number(arg: Option<&str>, command: &'static str) -> Result<usize, ParseError> {
    let arg = arg.ok_or(ParseError::MissingArgument(command))?;
    arg.parse()
        .map_err(|_| ParseError::InvalidNumber(arg.to_string()))
}

impl ReplCommand {
    /// Parses one line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        let head = head.to_lowercase();

        if let Ok(index) = head.parse::<usize>() {
            return Ok(Some(ReplCommand::Move(index)));
        }

        let command = match head.as_str() {
            "move" | "m" => ReplCommand::Move(number(words.next(), "move")?),
            "jump" | "j" => ReplCommand::Jump(number(words.next(), "jump")?),
            "sort" | "s" => ReplCommand::Sort,
            "restart" | "r" => ReplCommand::Restart,
            "help" | "h" | "?" => ReplCommand::Help,
            "quit" | "q" | "exit" => ReplCommand::Quit,
            _ => return Err(ParseError::Unknown(head.clone())),
        };
        Ok(Some(command))
    }
}

/// Runs the interactive loop until `quit` or end of input.
///
/// The board is redrawn after every accepted change; ignored moves
/// redraw nothing.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(game: &mut GameController, input: R, out: &mut W) -> Result<()> {
    let mut presenter = Presenter::new(game.subscribe());
    info!("Starting interactive session");

    writeln!(out, "{}", render(&game.snapshot()))?;
    writeln!(out, "Type `help` for commands.")?;

    for line in input.lines() {
        let line = line?;
        let command = match ReplCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{} (type `help`)", e)?;
                continue;
            }
        };

        match command {
            ReplCommand::Move(index) => game.apply_move(index),
            ReplCommand::Jump(step) => {
                if let Err(e) = game.jump_to(step) {
                    warn!(error = %e, "Jump rejected");
                    writeln!(out, "{}", e)?;
                }
            }
            ReplCommand::Sort => game.toggle_sort(),
            ReplCommand::Restart => game.restart(),
            ReplCommand::Help => writeln!(out, "{}", HELP)?,
            ReplCommand::Quit => break,
        }

        if presenter.take_changes() {
            writeln!(out, "{}", render(&game.snapshot()))?;
        }
    }

    info!("Interactive session ended");
    Ok(())
}
