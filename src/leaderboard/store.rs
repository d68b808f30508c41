//! File-backed leaderboard of cumulative scores.

use crate::leaderboard::LeaderboardError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// File the leaderboard lives in unless told otherwise.
pub const DEFAULT_LEADERBOARD_PATH: &str = "leaderboard.txt";

/// Player name to cumulative score.
///
/// Serialized as a plain JSON object. Entries iterate in name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: BTreeMap<String, i64>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Score recorded for `name`, if any.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.get(name).copied()
    }

    /// Adds `delta` to the entry for `name`, creating it at `delta`.
    ///
    /// Returns the new total.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError`] for a blank name or if the total would
    /// overflow.
    #[instrument(skip(self))]
    pub fn add(&mut self, name: &str, delta: i64) -> Result<i64, LeaderboardError> {
        if name.trim().is_empty() {
            return Err(LeaderboardError::new("Player name must not be empty"));
        }
        let total = self.entries.entry(name.to_string()).or_insert(0);
        *total = total
            .checked_add(delta)
            .ok_or_else(|| LeaderboardError::new(format!("Score overflow for '{}'", name)))?;
        Ok(*total)
    }

    /// Iterates over (name, score) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(name, score)| (name.as_str(), *score))
    }

    /// Number of players on the board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if nobody has saved a score yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Formats the leaderboard for display, one `name: score` per line.
    pub fn render(&self) -> String {
        let mut out = String::from("Leaderboard: \n");
        for (name, score) in self.iter() {
            out.push_str(&format!("{}: {}\n", name, score));
        }
        out
    }
}

impl FromIterator<(String, i64)> for Leaderboard {
    fn from_iter<I: IntoIterator<Item = (String, i64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Reads and writes the leaderboard file.
///
/// Every operation opens the file, reads or writes all of it, and closes it
/// again. Nothing is cached between calls.
#[derive(Debug, Clone, Getters)]
pub struct LeaderboardStore {
    /// Location of the leaderboard file.
    path: PathBuf,
}

impl LeaderboardStore {
    /// Creates a store for the file at `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads the leaderboard. A missing file is an empty leaderboard.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError`] if the file cannot be read or does not
    /// hold a JSON object of integer scores.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Leaderboard, LeaderboardError> {
        if !self.path.exists() {
            debug!("No leaderboard file yet");
            return Ok(Leaderboard::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let leaderboard: Leaderboard = serde_json::from_str(&content)?;
        info!(entries = leaderboard.len(), "Leaderboard loaded");
        Ok(leaderboard)
    }

    /// Adds `delta` to `name`'s total and writes the whole leaderboard back.
    ///
    /// Returns the leaderboard as written.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError`] if loading fails, the name is blank, or
    /// the file cannot be written.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn save(&self, name: &str, delta: i64) -> Result<Leaderboard, LeaderboardError> {
        let mut leaderboard = self.load()?;
        let total = leaderboard.add(name, delta)?;
        self.write(&leaderboard)?;
        info!(name, delta, total, "Score saved");
        Ok(leaderboard)
    }

    /// Replaces the file with `leaderboard`.
    ///
    /// Writes a sibling temporary file first and renames it over the target,
    /// so an interrupted save leaves the previous file intact.
    ///
    /// # Errors
    ///
    /// Returns [`LeaderboardError`] on serialization or I/O failure.
    #[instrument(skip(self, leaderboard), fields(path = %self.path.display(), entries = leaderboard.len()))]
    pub fn write(&self, leaderboard: &Leaderboard) -> Result<(), LeaderboardError> {
        let json = serde_json::to_string(leaderboard)?;
        let tmp = self.temp_path();
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)?;
        debug!("Leaderboard written");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl Default for LeaderboardStore {
    fn default() -> Self {
        Self::new(DEFAULT_LEADERBOARD_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates() {
        let mut leaderboard = Leaderboard::new();
        assert_eq!(leaderboard.add("Alice", 3).unwrap(), 3);
        assert_eq!(leaderboard.add("Alice", -1).unwrap(), 2);
        assert_eq!(leaderboard.get("Alice"), Some(2));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut leaderboard = Leaderboard::new();
        assert!(leaderboard.add("   ", 1).is_err());
        assert!(leaderboard.is_empty());
    }

    #[test]
    fn test_render_lists_entries_in_name_order() {
        let leaderboard: Leaderboard = [("Bob".to_string(), -2), ("Alice".to_string(), 5)]
            .into_iter()
            .collect();
        assert_eq!(leaderboard.render(), "Leaderboard: \nAlice: 5\nBob: -2\n");
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let leaderboard: Leaderboard = [("Alice".to_string(), 3)].into_iter().collect();
        assert_eq!(serde_json::to_string(&leaderboard).unwrap(), r#"{"Alice":3}"#);
    }
}
