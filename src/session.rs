//! Command surface for the presentation layer
//!
//! A `Session` owns the live game state, the settings it was opened with and
//! the key-value store saves go to. Every mutating command takes `&mut self`,
//! so commands against one session are serialized by construction. Hosts
//! that share a session between clients must put their own queue or lock
//! around it.
//!
//! A command that changed the state always reports success. If the autosave
//! after it fails, the failure is logged and `has_unsaved_changes` stays true
//! until a later save goes through.

use crate::error::Result;
use crate::game::{DifficultyPolicy, Figure, GameState, RecordOutcome};
use crate::leaderboard::{Leaderboard, figures_by_weight};
use crate::persistence;
use crate::platform::KeyValueStore;
use crate::settings::Settings;

/// Result of asking the store for a saved game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The saved game replaced the live state
    Restored,
    /// Nothing was saved; the live state is unchanged
    NothingSaved,
}

pub struct Session<S: KeyValueStore> {
    state: GameState,
    settings: Settings,
    store: S,
    unsaved: bool,
}

impl<S: KeyValueStore> Session<S> {
    /// Fresh, empty session using the settings found in `store`
    pub fn open(store: S) -> Self {
        let settings = Settings::load(&store);
        Self::with_settings(store, settings)
    }

    pub fn with_settings(store: S, settings: Settings) -> Self {
        log::info!("Session opened (policy {})", settings.policy.as_str());
        Self {
            state: GameState::new(),
            settings,
            store,
            unsaved: false,
        }
    }

    pub fn add_player(&mut self, name: &str) -> Result<()> {
        self.state.add_player(name).inspect_err(log_rejection)?;
        self.autosave();
        Ok(())
    }

    pub fn add_figure(&mut self, name: &str) -> Result<()> {
        self.state.add_figure(name).inspect_err(log_rejection)?;
        self.autosave();
        Ok(())
    }

    pub fn append_story(&mut self, sentence: &str) -> Result<()> {
        self.state.append_story(sentence).inspect_err(log_rejection)?;
        self.autosave();
        Ok(())
    }

    /// Judge one attempt with the session's difficulty policy
    pub fn record(&mut self, player: &str, figure: &str, correct: bool) -> Result<RecordOutcome> {
        let outcome = self
            .state
            .record(player, figure, correct, &self.settings.policy)
            .inspect_err(log_rejection)?;
        log::debug!(
            "{} {} {}: weight {:.4} -> {:.4}, score {:+.4} = {:.4}",
            outcome.player,
            if correct { "got" } else { "missed" },
            outcome.figure,
            outcome.previous_weight,
            outcome.new_weight,
            outcome.score_delta,
            outcome.score
        );
        self.autosave();
        Ok(outcome)
    }

    /// Write the whole state under the configured save key
    pub fn save(&mut self) -> Result<()> {
        let json = persistence::save(&self.state)?;
        self.store.set(&self.settings.save_key, &json)?;
        self.unsaved = false;
        log::info!(
            "Game saved ({} players, {} figures, {} sentences)",
            self.state.players().len(),
            self.state.figures().len(),
            self.state.story().len()
        );
        Ok(())
    }

    /// Replace the live state with the saved one.
    ///
    /// On any error the live state is left exactly as it was.
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let Some(json) = self.store.get(&self.settings.save_key)? else {
            log::info!("No saved game found");
            return Ok(LoadOutcome::NothingSaved);
        };
        let restored = persistence::load(&json).inspect_err(|e| log::warn!("{e}"))?;
        self.state.replace(restored);
        self.unsaved = false;
        log::info!("Loaded saved game ({} players)", self.state.players().len());
        Ok(LoadOutcome::Restored)
    }

    pub fn has_save(&self) -> Result<bool> {
        Ok(self.store.get(&self.settings.save_key)?.is_some())
    }

    pub fn clear_save(&mut self) -> Result<()> {
        self.store.remove(&self.settings.save_key)?;
        log::info!("Saved game cleared");
        Ok(())
    }

    pub fn snapshot(&self) -> GameState {
        self.state.snapshot()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::from_state(&self.state)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Switch difficulty policy and persist the choice
    pub fn set_policy(&mut self, policy: DifficultyPolicy) -> Result<()> {
        self.settings.policy = policy;
        self.settings.save(&mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// True when the live state holds changes no save has captured yet
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Figures ordered easiest first
    pub fn figures_by_weight(&self) -> Vec<&Figure> {
        figures_by_weight(&self.state)
    }

    fn autosave(&mut self) {
        self.unsaved = true;
        if !self.settings.autosave {
            return;
        }
        if let Err(e) = self.save() {
            log::warn!("Autosave failed, change kept in memory: {e}");
        }
    }
}

fn log_rejection(error: &crate::GameError) {
    log::warn!("Command rejected: {error}");
}
