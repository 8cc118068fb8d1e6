//! Rewind - tic-tac-toe with time travel.

use anyhow::{Context, Result};
use clap::Parser;
use rewind_cli::{
    Cli, Command, RewindConfig, apply_config_filter, env_filter_set, init_tracing, render, run,
};
use rewind_tictactoe::GameController;
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = init_tracing();
    let config = RewindConfig::load(cli.config.as_deref())?;
    apply_config_filter(&filter, config.log_filter(), env_filter_set())
        .context("Failed to apply configured log filter")?;

    let mut game = GameController::with_sort(*config.initial_sort());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run(&mut game, stdin.lock(), &mut stdout)
        }
        Command::Replay { moves, json } => replay(&mut game, &moves, json),
    }
}

/// Applies `moves` and prints the resulting position.
#[instrument(skip(game))]
fn replay(game: &mut GameController, moves: &[u8], json: bool) -> Result<()> {
    for (n, &index) in moves.iter().enumerate() {
        game.try_apply_move(usize::from(index))
            .with_context(|| format!("Move {} (square {}) rejected", n + 1, index))?;
    }
    info!(moves = moves.len(), "Replay complete");

    if json {
        let text = serde_json::to_string_pretty(&game.snapshot())
            .context("Failed to serialize snapshot")?;
        println!("{}", text);
    } else {
        print!("{}", render(&game.snapshot()));
    }
    Ok(())
}
