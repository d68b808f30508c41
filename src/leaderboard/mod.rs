//! Persistent name to cumulative score leaderboard.

mod error;
mod store;

pub use error::LeaderboardError;
pub use store::{DEFAULT_LEADERBOARD_PATH, Leaderboard, LeaderboardStore};
