//! Cross-Zero - unified CLI
//!
//! Plays in the terminal, or inspects and resets the scoreboard.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use cross_zero::{Config, FileStore, Player, ScoreLedger};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(load_config(&cli)?),
        Command::Scores => {
            initialize_stderr_tracing();
            show_scores(&load_config(&cli)?)
        }
        Command::ResetScores => {
            initialize_stderr_tracing();
            reset_scores(&load_config(&cli)?)
        }
    }
}

/// Loads the config file and applies command-line overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_or_default(&cli.config)?;
    Ok(match &cli.data_dir {
        Some(dir) => config.with_data_dir(dir.clone()),
        None => config,
    })
}

/// Prints the scoreboard.
#[instrument(skip(config))]
fn show_scores(config: &Config) -> Result<()> {
    let ledger = ScoreLedger::load(FileStore::new(config.data_dir()));
    debug!(dir = %ledger.store().dir().display(), "Scores read");
    let scores = ledger.counts();
    for player in Player::iter() {
        println!("{}:    {}", player, scores.wins(player));
    }
    println!("Draw: {}", scores.draws);
    Ok(())
}

/// Zeroes the scoreboard.
#[instrument(skip(config))]
fn reset_scores(config: &Config) -> Result<()> {
    let mut ledger = ScoreLedger::load(FileStore::new(config.data_dir()));
    let before = ledger.counts();
    ledger.reset_all();
    info!(?before, "Scoreboard cleared");
    println!("Scores reset (were X {}, O {}, Draw {})", before.x, before.o, before.draws);
    Ok(())
}

fn initialize_stderr_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
