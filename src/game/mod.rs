//! Game model and scoring engine
//!
//! Everything here is pure and synchronous:
//! - No storage or platform dependencies
//! - Figures and players keep insertion order
//! - Weights stay inside [0, 1]

pub mod difficulty;
pub mod ledger;
pub mod state;
pub mod story;

pub use difficulty::{AdditiveDelta, Adjustment, Difficulty, DifficultyPolicy, SignFlip};
pub use ledger::ScoreLedger;
pub use state::{Figure, GameState, RecordOutcome};
pub use story::Story;
