//! Adaptive difficulty policies
//!
//! A policy turns a judgment on a figure into the figure's next weight and
//! the score the player earns (or loses) for the attempt.

use serde::{Deserialize, Serialize};

use crate::consts::{ADDITIVE_STEP, SIGN_FLIP_STEP};
use crate::{clamp_unit, sigmoid};

/// Result of judging one attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    /// Figure weight after the judgment, always in [0, 1]
    pub new_weight: f64,
    /// Amount added to the player's score (may be negative)
    pub score_delta: f64,
}

/// Capability shared by every difficulty policy
pub trait Difficulty {
    fn adjust(&self, weight: f64, correct: bool) -> Adjustment;
}

/// Nudges the weight by a small step and pays out the new weight.
///
/// Scores never decrease under this policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AdditiveDelta;

impl Difficulty for AdditiveDelta {
    fn adjust(&self, weight: f64, correct: bool) -> Adjustment {
        let delta = if correct { -ADDITIVE_STEP } else { ADDITIVE_STEP };
        let new_weight = clamp_unit(sigmoid(weight + delta));
        Adjustment {
            new_weight,
            score_delta: new_weight,
        }
    }
}

/// Pays the current weight on a correct answer and charges it on a miss,
/// then swings the weight hard in the opposite direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignFlip;

impl Difficulty for SignFlip {
    fn adjust(&self, weight: f64, correct: bool) -> Adjustment {
        if correct {
            Adjustment {
                new_weight: clamp_unit(sigmoid(weight - SIGN_FLIP_STEP)),
                score_delta: weight,
            }
        } else {
            Adjustment {
                new_weight: clamp_unit(sigmoid(weight + SIGN_FLIP_STEP)),
                score_delta: -weight,
            }
        }
    }
}

/// Policy selected per session through settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DifficultyPolicy {
    #[default]
    AdditiveDelta,
    SignFlip,
}

impl DifficultyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPolicy::AdditiveDelta => "additive-delta",
            DifficultyPolicy::SignFlip => "sign-flip",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "additive-delta" | "additive" | "a" => Some(DifficultyPolicy::AdditiveDelta),
            "sign-flip" | "signflip" | "flip" | "b" => Some(DifficultyPolicy::SignFlip),
            _ => None,
        }
    }
}

impl Difficulty for DifficultyPolicy {
    fn adjust(&self, weight: f64, correct: bool) -> Adjustment {
        match self {
            DifficultyPolicy::AdditiveDelta => AdditiveDelta.adjust(weight, correct),
            DifficultyPolicy::SignFlip => SignFlip.adjust(weight, correct),
        }
    }
}
