//! High score leaderboard
//!
//! Tracks the top 10 scores by name, sorted descending. Ties keep insertion
//! order: a new record never ranks above an equal existing one. Persisted as
//! JSON next to the game.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u64,
}

/// High score leaderboard, sorted by score descending
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub entries: Vec<ScoreRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add a record (if it qualifies). Returns the 1-indexed rank achieved.
    pub fn add_score(&mut self, name: impl Into<String>, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }

        let record = ScoreRecord { name: name.into(), score };

        // Strictly-greater ranks above: equal scores keep insertion order.
        let pos = self.entries.iter().position(|e| score > e.score);
        let rank = match pos {
            Some(i) => {
                self.entries.insert(i, record);
                i + 1
            }
            None => {
                self.entries.push(record);
                self.entries.len()
            }
        };

        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the top score (if any)
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Load the leaderboard from a JSON file. A missing or corrupt file
    /// degrades to an empty board with a warning, never an error.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<HighScores>(&json) {
                Ok(scores) => {
                    log::info!("loaded {} high scores", scores.entries.len());
                    scores
                }
                Err(err) => {
                    log::warn!("corrupt high score file {}: {err}", path.display());
                    Self::new()
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("no high scores yet, starting fresh");
                Self::new()
            }
            Err(err) => {
                log::warn!("could not read {}: {err}", path.display());
                Self::new()
            }
        }
    }

    /// Save the leaderboard as JSON.
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("high scores saved ({} entries)", self.entries.len());
        Ok(())
    }
}
