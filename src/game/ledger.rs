//! Running score per player

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Mapping from player name to accumulated score
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreLedger {
    scores: BTreeMap<String, f64>,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a player's total at zero
    pub(crate) fn open(&mut self, player: &str) {
        self.scores.insert(player.to_string(), 0.0);
    }

    /// Add `delta` to a player's total and return the new total
    pub fn apply(&mut self, player: &str, delta: f64) -> Result<f64> {
        let total = self
            .scores
            .get_mut(player)
            .ok_or_else(|| GameError::UnknownPlayer(player.to_string()))?;
        *total += delta;
        Ok(*total)
    }

    pub fn get(&self, player: &str) -> Option<f64> {
        self.scores.get(player).copied()
    }

    pub fn contains(&self, player: &str) -> bool {
        self.scores.contains_key(player)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(name, score)| (name.as_str(), *score))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

impl From<BTreeMap<String, f64>> for ScoreLedger {
    fn from(scores: BTreeMap<String, f64>) -> Self {
        Self { scores }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_accumulates() {
        let mut ledger = ScoreLedger::new();
        ledger.open("Ada");
        assert_eq!(ledger.apply("Ada", 0.5).unwrap(), 0.5);
        assert_eq!(ledger.apply("Ada", -0.25).unwrap(), 0.25);
        assert_eq!(ledger.get("Ada"), Some(0.25));
    }

    #[test]
    fn test_apply_unknown_player_is_error() {
        let mut ledger = ScoreLedger::new();
        let err = ledger.apply("Ghost", 1.0).unwrap_err();
        assert!(matches!(err, GameError::UnknownPlayer(ref name) if name == "Ghost"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_iter_is_sorted_by_name() {
        let mut ledger = ScoreLedger::new();
        ledger.open("Zed");
        ledger.open("Ada");
        let names: Vec<_> = ledger.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Ada", "Zed"]);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut ledger = ScoreLedger::new();
        ledger.open("Ada");
        ledger.apply("Ada", 1.5).unwrap();
        assert_eq!(serde_json::to_string(&ledger).unwrap(), r#"{"Ada":1.5}"#);
    }
}
