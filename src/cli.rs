//! Command-line interface for cross_zero.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cross-Zero - pass-and-play tic-tac-toe with a persistent scoreboard
#[derive(Parser, Debug)]
#[command(name = "cross_zero")]
#[command(about = "Pass-and-play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = "cross_zero.toml")]
    pub config: PathBuf,

    /// Directory holding the score record (overrides the config file)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Print the scoreboard
    Scores,

    /// Zero the scoreboard
    ResetScores,
}
