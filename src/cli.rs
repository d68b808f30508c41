//! Command-line interface for noughts_and_crosses.

use clap::Parser;
use noughts_and_crosses::DEFAULT_LEADERBOARD_PATH;

/// Unbeatable Noughts and Crosses - play the computer in your terminal
#[derive(Parser, Debug)]
#[command(name = "noughts_and_crosses")]
#[command(about = "Noughts and crosses against the computer, with a leaderboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Leaderboard file (created on first save)
    #[arg(long, default_value = DEFAULT_LEADERBOARD_PATH)]
    pub leaderboard: std::path::PathBuf,

    /// Seed for the computer's moves, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,
}
