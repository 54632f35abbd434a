//! Player preferences
//!
//! Persisted separately from best scores. Anything unreadable falls back to
//! defaults; settings are never a reason to fail startup.

use serde::{Deserialize, Serialize};

use crate::runner::Character;
use crate::snake::Grade;
use crate::storage::KeyValueStore;

/// Cross-game preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Runner character selection.
    pub character: Character,
    /// Quiz snake difficulty grade.
    pub grade: Grade,
    /// Master volume (0.0 - 1.0).
    pub master_volume: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            character: Character::default(),
            grade: Grade::default(),
            master_volume: 0.8,
        }
    }
}

impl Settings {
    const STORAGE_KEY: &'static str = "mini_arcade_settings";

    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(err) => log::warn!("Discarding unreadable settings: {err}"),
            }
        }
        Self::default()
    }

    pub fn save<S: KeyValueStore>(&self, store: &mut S) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
            Err(err) => log::warn!("Failed to encode settings: {err}"),
        }
    }

    /// Volume clamped to the valid range.
    pub fn effective_volume(&self) -> f32 {
        self.master_volume.clamp(0.0, 1.0)
    }
}
