#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// Best finished game for one board size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    /// Fewest moves to solve
    pub moves: u32,
    /// Time of that game in seconds
    pub time_secs: u64,
    /// Unix timestamp when it was set
    pub timestamp: u64,
}

impl BestScore {
    /// Ordering for "is the candidate a new best": fewer moves wins, ties
    /// broken by time
    fn beats(candidate: (u32, u64), current: &BestScore) -> bool {
        candidate.0 < current.moves
            || (candidate.0 == current.moves && candidate.1 < current.time_secs)
    }
}

/// On-disk shape of the score file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ScoreFile {
    /// Keyed by board size as a string ("4" for the 15-puzzle)
    by_size: HashMap<String, BestScore>,
}

/// Best-score cache, one record per board size.
///
/// Persisted as JSON under the platform data directory; falls back to
/// in-memory when no data directory is available (and always in tests).
/// Save failures are swallowed: losing a best score beats crashing the game
/// over a read-only disk.
pub struct ScoreBook {
    path: Option<PathBuf>,
    scores: ScoreFile,
}

impl ScoreBook {
    /// Load from the default platform location
    pub fn load() -> Self {
        let path = Self::default_path();
        Self::load_from(path)
    }

    /// In-memory book that never touches the disk
    pub fn in_memory() -> Self {
        Self {
            path: None,
            scores: ScoreFile::default(),
        }
    }

    /// Load from an explicit path (tests use a temp dir)
    pub fn load_from(path: Option<PathBuf>) -> Self {
        let scores = path
            .as_ref()
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or_default();
        Self { path, scores }
    }

    fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("slide-puzzle").join("scores.json"))
    }

    /// Best score for an N×N board, if any game of that size has been won
    pub fn best(&self, size: usize) -> Option<&BestScore> {
        self.scores.by_size.get(&size.to_string())
    }

    /// Record a finished game. Returns true when it set a new best for its
    /// size (fewest moves, ties broken by time).
    pub fn record(&mut self, size: usize, moves: u32, time_secs: u64) -> bool {
        let key = size.to_string();
        let improved = match self.scores.by_size.get(&key) {
            Some(current) => BestScore::beats((moves, time_secs), current),
            None => true,
        };
        if improved {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            self.scores.by_size.insert(
                key,
                BestScore {
                    moves,
                    time_secs,
                    timestamp,
                },
            );
            self.save();
        }
        improved
    }

    /// All recorded bests, smallest board first
    pub fn all(&self) -> Vec<(usize, BestScore)> {
        let mut entries: Vec<(usize, BestScore)> = self
            .scores
            .by_size
            .iter()
            .filter_map(|(key, score)| key.parse().ok().map(|size| (size, *score)))
            .collect();
        entries.sort_by_key(|(size, _)| *size);
        entries
    }

    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(&self.scores) {
            let _ = fs::write(path, json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_finish_is_always_best() {
        let mut book = ScoreBook::in_memory();
        assert!(book.best(4).is_none());
        assert!(book.record(4, 120, 95));
        let best = book.best(4).unwrap();
        assert_eq!(best.moves, 120);
        assert_eq!(best.time_secs, 95);
    }

    #[test]
    fn test_fewer_moves_beats_faster_time() {
        let mut book = ScoreBook::in_memory();
        book.record(4, 100, 60);
        // More moves in less time is not an improvement
        assert!(!book.record(4, 110, 10));
        assert_eq!(book.best(4).unwrap().moves, 100);
        // Equal moves, faster time is
        assert!(book.record(4, 100, 45));
        assert_eq!(book.best(4).unwrap().time_secs, 45);
        // Fewer moves always is
        assert!(book.record(4, 80, 300));
        assert_eq!(book.best(4).unwrap().moves, 80);
    }

    #[test]
    fn test_sizes_tracked_separately() {
        let mut book = ScoreBook::in_memory();
        book.record(3, 40, 30);
        book.record(4, 150, 200);
        assert_eq!(book.best(3).unwrap().moves, 40);
        assert_eq!(book.best(4).unwrap().moves, 150);
        assert!(book.best(5).is_none());

        let all = book.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].0, 3);
        assert_eq!(all[1].0, 4);
    }

    #[test]
    fn test_round_trips_through_file() {
        let dir = std::env::temp_dir().join("slide-scorebook-test");
        let path = dir.join("scores.json");
        let _ = fs::remove_file(&path);

        let mut book = ScoreBook::load_from(Some(path.clone()));
        book.record(4, 90, 77);

        let reloaded = ScoreBook::load_from(Some(path.clone()));
        let best = reloaded.best(4).unwrap();
        assert_eq!(best.moves, 90);
        assert_eq!(best.time_secs, 77);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_empty_book() {
        let book = ScoreBook::load_from(Some(PathBuf::from("/nonexistent/scores.json")));
        assert!(book.best(4).is_none());
    }
}
