//! Figures Please - adaptive scoring for a party game of rhetorical figures
//!
//! Core modules:
//! - `game`: Game state, difficulty policies, score ledger, story log
//! - `persistence`: Save/load of the game document with validation
//! - `platform`: Key-value storage backends (LocalStorage on web)
//! - `session`: Command surface consumed by the UI layer
//! - `settings`: Per-session configuration
//! - `leaderboard`: Ranked standings for display

pub mod error;
pub mod game;
pub mod leaderboard;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod settings;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use error::{GameError, Result};
pub use game::{
    AdditiveDelta, Adjustment, Difficulty, DifficultyPolicy, Figure, GameState, RecordOutcome,
    ScoreLedger, SignFlip, Story,
};
pub use leaderboard::{Leaderboard, Standing};
pub use platform::{KeyValueStore, MemoryStore};
pub use session::{LoadOutcome, Session};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Weight given to a freshly added figure (medium)
    pub const INITIAL_WEIGHT: f64 = 0.5;

    /// Weight nudge applied by the additive-delta policy
    pub const ADDITIVE_STEP: f64 = 0.1;
    /// Weight shift applied by the sign-flip policy
    pub const SIGN_FLIP_STEP: f64 = 1.0;

    /// Default key the game document is stored under
    pub const SAVE_KEY: &str = "gameState";
}

/// Logistic squashing function, maps ℝ onto (0, 1)
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Clamp a weight into [0, 1]
#[inline]
pub fn clamp_unit(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sigmoid_midpoint() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!((sigmoid(0.4) - 0.598_687_660_112_452).abs() < 1e-9);
    }

    #[test]
    fn test_sigmoid_saturates_inside_unit() {
        assert!(sigmoid(-50.0) >= 0.0);
        assert!(sigmoid(50.0) <= 1.0);
        assert!(sigmoid(1.0) > sigmoid(-1.0));
    }

    #[test]
    fn test_clamp_unit() {
        assert_eq!(clamp_unit(-0.2), 0.0);
        assert_eq!(clamp_unit(1.7), 1.0);
        assert_eq!(clamp_unit(0.25), 0.25);
    }
}
