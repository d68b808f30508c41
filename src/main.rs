//! Unbeatable Noughts and Crosses - terminal entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use noughts_and_crosses::{ComputerPlayer, Console, HumanPlayer, LeaderboardStore, Session};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();
    run(cli)
}

/// Plays a session on stdin/stdout.
#[instrument(skip_all, fields(leaderboard = %cli.leaderboard.display(), seed = ?cli.seed))]
fn run(cli: Cli) -> Result<()> {
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let terminal = Console::new(std::io::stdin().lock(), std::io::stdout());
    let mut session = Session::new(
        terminal,
        HumanPlayer::default(),
        ComputerPlayer::new("Computer", rng),
        LeaderboardStore::new(&cli.leaderboard),
    );

    info!("Starting session");
    session.run()?;
    info!("Session ended");
    Ok(())
}

/// Logs go to stderr so they never mix with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
