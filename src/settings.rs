//! Session settings
//!
//! Persisted separately from the game document, under its own key.

use serde::{Deserialize, Serialize};

use crate::consts::SAVE_KEY;
use crate::error::Result;
use crate::game::DifficultyPolicy;
use crate::platform::KeyValueStore;

/// Per-session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// How judgments move weights and scores
    pub policy: DifficultyPolicy,
    /// Key the game document is saved under
    pub save_key: String,
    /// Save after every successful command
    pub autosave: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            policy: DifficultyPolicy::AdditiveDelta,
            save_key: SAVE_KEY.to_string(),
            autosave: false,
        }
    }
}

impl Settings {
    /// Storage key for the settings themselves
    pub const STORAGE_KEY: &'static str = "figures_please_settings";

    pub fn with_policy(policy: DifficultyPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Load settings, falling back to defaults when absent or unreadable
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {e}"),
            },
            Ok(None) => {}
            Err(e) => log::warn!("Settings unavailable: {e}"),
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<()> {
        let json = serde_json::to_string(self)?;
        store.set(Self::STORAGE_KEY, &json)?;
        log::info!("Settings saved (policy {})", self.policy.as_str());
        Ok(())
    }
}
