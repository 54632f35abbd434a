//! Best scores
//!
//! One persisted scalar per game. Read once at startup, written only when a
//! finished run beats the stored value.

use serde::{Deserialize, Serialize};

use crate::storage::KeyValueStore;

/// Which game a score belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameId {
    Runner,
    Snake,
    Balloon,
    Melody,
}

impl GameId {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameId::Runner => "runner",
            GameId::Snake => "snake",
            GameId::Balloon => "balloon",
            GameId::Melody => "melody",
        }
    }
}

/// Per-game best scores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BestScores {
    #[serde(default)]
    runner: u32,
    #[serde(default)]
    snake: u32,
    #[serde(default)]
    balloon: u32,
    #[serde(default)]
    melody: u32,
}

impl BestScores {
    const STORAGE_KEY: &'static str = "mini_arcade_best_scores";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self, game: GameId) -> u32 {
        match game {
            GameId::Runner => self.runner,
            GameId::Snake => self.snake,
            GameId::Balloon => self.balloon,
            GameId::Melody => self.melody,
        }
    }

    /// Record a finished run. Returns true when the score is a new best;
    /// the caller is expected to `save` in that case.
    pub fn record(&mut self, game: GameId, score: u32) -> bool {
        let slot = match game {
            GameId::Runner => &mut self.runner,
            GameId::Snake => &mut self.snake,
            GameId::Balloon => &mut self.balloon,
            GameId::Melody => &mut self.melody,
        };
        if score > *slot {
            *slot = score;
            true
        } else {
            false
        }
    }

    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(scores) => {
                    log::info!("Loaded best scores");
                    return scores;
                }
                Err(err) => log::warn!("Discarding unreadable best scores: {err}"),
            }
        }
        Self::new()
    }

    pub fn save<S: KeyValueStore>(&self, store: &mut S) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set(Self::STORAGE_KEY, &json);
                log::info!("Best scores saved");
            }
            Err(err) => log::warn!("Failed to encode best scores: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn record_only_improvements() {
        let mut scores = BestScores::new();
        assert!(scores.record(GameId::Runner, 120));
        assert!(!scores.record(GameId::Runner, 120));
        assert!(!scores.record(GameId::Runner, 80));
        assert!(scores.record(GameId::Runner, 121));
        assert_eq!(scores.best(GameId::Runner), 121);
    }

    #[test]
    fn games_have_independent_slots() {
        let mut scores = BestScores::new();
        scores.record(GameId::Snake, 50);
        assert_eq!(scores.best(GameId::Snake), 50);
        assert_eq!(scores.best(GameId::Balloon), 0);
    }

    #[test]
    fn round_trip_through_store() {
        let mut store = MemoryStore::new();
        let mut scores = BestScores::new();
        scores.record(GameId::Melody, 9);
        scores.save(&mut store);

        let loaded = BestScores::load(&store);
        assert_eq!(loaded.best(GameId::Melody), 9);
    }

    #[test]
    fn corrupt_json_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set("mini_arcade_best_scores", "{not json");
        let loaded = BestScores::load(&store);
        assert_eq!(loaded.best(GameId::Runner), 0);
    }
}
