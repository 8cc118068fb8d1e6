//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a move history you can jump through
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Apply cell indices in order and print the final position
    Replay {
        /// Cell indices (0-8, row-major)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        moves: Vec<u8>,

        /// Print the game snapshot as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
