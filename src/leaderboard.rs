//! Per-difficulty score tables.
//!
//! The game core produces exactly one number worth keeping: the elapsed
//! time at victory. This module owns the ordered score lists built from
//! those times, one per difficulty tier, each ascending by time and capped
//! at [`LEADERBOARD_CAP`] entries.
//!
//! Persistence stays the host's job. The whole store round-trips through a
//! single JSON document via [`Leaderboard::to_json`] and
//! [`Leaderboard::from_json`], so it can be parked in a file, a browser
//! storage slot, or any other key-value store without the core caring.

use std::collections::HashMap;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::config::{Difficulty, LEADERBOARD_CAP};

/// One recorded run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    /// Player-chosen name; never empty.
    pub name: String,
    /// Completion time in seconds.
    pub time: f64,
    /// When the run was recorded.
    pub recorded_at: DateTime<Local>,
}

/// Score tables keyed by difficulty tier.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Leaderboard {
    scores: HashMap<Difficulty, Vec<ScoreEntry>>,
}

impl Leaderboard {
    /// Creates an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored entries for a tier, best time first. Unknown tiers yield
    /// an empty slice.
    pub fn load(&self, difficulty: Difficulty) -> &[ScoreEntry] {
        self.scores
            .get(&difficulty)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Records a run for a tier.
    ///
    /// The name is trimmed first; an empty result is silently ignored
    /// rather than treated as an error, matching the permissive submission
    /// policy of the menu UI. The list is re-sorted ascending by time and
    /// truncated to the cap, so a time worse than a full table simply
    /// drops off the end.
    pub fn submit(&mut self, difficulty: Difficulty, name: &str, time: f64) {
        let name = name.trim();
        if name.is_empty() {
            log::debug!("dropping score submission with empty name");
            return;
        }
        let entries = self.scores.entry(difficulty).or_default();
        entries.push(ScoreEntry {
            name: name.to_owned(),
            time,
            recorded_at: Local::now(),
        });
        entries.sort_by(|a, b| a.time.total_cmp(&b.time));
        entries.truncate(LEADERBOARD_CAP);
        log::debug!("recorded {time:.2}s for {name:?} on {difficulty:?}");
    }

    /// Serializes the whole store into a JSON document for the host to
    /// persist.
    ///
    /// # Errors
    /// Forwards `serde_json` serialization failures.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Restores a store from a previously serialized document.
    ///
    /// # Errors
    /// Forwards `serde_json` parse failures; a corrupt document never
    /// panics.
    pub fn from_json(data: &str) -> serde_json::Result<Self> {
        serde_json::from_str(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_come_back_ascending_by_time() {
        let mut board = Leaderboard::new();
        board.submit(Difficulty::Easy, "ada", 12.0);
        board.submit(Difficulty::Easy, "grace", 5.0);
        board.submit(Difficulty::Easy, "alan", 8.0);

        let times: Vec<f64> = board
            .load(Difficulty::Easy)
            .iter()
            .map(|entry| entry.time)
            .collect();
        assert_eq!(times, vec![5.0, 8.0, 12.0]);
    }

    #[test]
    fn tiers_are_independent() {
        let mut board = Leaderboard::new();
        board.submit(Difficulty::Easy, "ada", 12.0);
        assert!(board.load(Difficulty::Medium).is_empty());
        assert_eq!(board.load(Difficulty::Easy).len(), 1);
    }

    #[test]
    fn a_worse_eleventh_time_is_dropped() {
        let mut board = Leaderboard::new();
        for i in 0..10 {
            board.submit(Difficulty::Hard, "runner", 10.0 + i as f64);
        }
        board.submit(Difficulty::Hard, "late", 99.0);

        let entries = board.load(Difficulty::Hard);
        assert_eq!(entries.len(), LEADERBOARD_CAP);
        assert!(entries.iter().all(|entry| entry.name != "late"));
    }

    #[test]
    fn a_better_time_displaces_the_worst() {
        let mut board = Leaderboard::new();
        for i in 0..10 {
            board.submit(Difficulty::Hard, "runner", 10.0 + i as f64);
        }
        board.submit(Difficulty::Hard, "fast", 1.0);

        let entries = board.load(Difficulty::Hard);
        assert_eq!(entries.len(), LEADERBOARD_CAP);
        assert_eq!(entries[0].name, "fast");
        assert!(entries.iter().all(|entry| entry.time < 19.0));
    }

    #[test]
    fn empty_and_whitespace_names_are_ignored() {
        let mut board = Leaderboard::new();
        board.submit(Difficulty::Easy, "", 5.0);
        board.submit(Difficulty::Easy, "   ", 5.0);
        assert!(board.load(Difficulty::Easy).is_empty());
    }

    #[test]
    fn names_are_trimmed_on_submission() {
        let mut board = Leaderboard::new();
        board.submit(Difficulty::Easy, "  ada  ", 5.0);
        assert_eq!(board.load(Difficulty::Easy)[0].name, "ada");
    }

    #[test]
    fn the_store_round_trips_through_json() {
        let mut board = Leaderboard::new();
        board.submit(Difficulty::Easy, "ada", 12.0);
        board.submit(Difficulty::Easy, "grace", 5.0);
        board.submit(Difficulty::Hard, "alan", 42.0);

        let document = board.to_json().expect("serialize leaderboard");
        let restored = Leaderboard::from_json(&document).expect("parse leaderboard");

        let easy: Vec<(String, f64)> = restored
            .load(Difficulty::Easy)
            .iter()
            .map(|entry| (entry.name.clone(), entry.time))
            .collect();
        assert_eq!(easy, vec![("grace".to_owned(), 5.0), ("ada".to_owned(), 12.0)]);
        assert_eq!(restored.load(Difficulty::Hard).len(), 1);
    }

    #[test]
    fn corrupt_documents_are_an_error_not_a_panic() {
        assert!(Leaderboard::from_json("not json").is_err());
    }
}
