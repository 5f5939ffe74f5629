//! Raw persisted document and its validation

use std::collections::{BTreeMap, HashSet};
use std::fmt::{self, Display};

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::game::{Figure, GameState, ScoreLedger, Story};

type ValidationResult<T> = std::result::Result<T, String>;

/// Figure as stored; early saves called the weight `difficulty`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureRecord {
    pub name: String,
    #[serde(alias = "difficulty")]
    pub weight: f64,
}

/// Document exactly as found under the save key, before validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveDocument {
    pub players: Vec<String>,
    pub figures: Vec<FigureRecord>,
    pub story: Vec<String>,
    #[serde(deserialize_with = "unique_scores")]
    pub scores: BTreeMap<String, f64>,
}

/// Score map that rejects a player appearing twice
fn unique_scores<'de, D>(deserializer: D) -> Result<BTreeMap<String, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct ScoresVisitor;

    impl<'de> Visitor<'de> for ScoresVisitor {
        type Value = BTreeMap<String, f64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of player name to score")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut scores = BTreeMap::new();
            while let Some((player, score)) = map.next_entry::<String, f64>()? {
                if scores.contains_key(&player) {
                    return Err(serde::de::Error::custom(format!(
                        "duplicate score entry for player {player:?}"
                    )));
                }
                scores.insert(player, score);
            }
            Ok(scores)
        }
    }

    deserializer.deserialize_map(ScoresVisitor)
}

fn validation_err(path: &str, message: impl Into<String>) -> String {
    format!("validation failed at {path}: {}", message.into())
}

fn expected_actual(path: &str, expected: impl Display, actual: impl Display) -> String {
    validation_err(path, format!("expected {expected}, got {actual}"))
}

impl SaveDocument {
    pub fn parse(raw: &str) -> ValidationResult<SaveDocument> {
        let mut deserializer = serde_json::Deserializer::from_str(raw);
        match serde_path_to_error::deserialize::<_, SaveDocument>(&mut deserializer) {
            Ok(document) => {
                deserializer
                    .end()
                    .map_err(|e| format!("parse save json: {e}"))?;
                Ok(document)
            }
            Err(error) => {
                let path = error.path().to_string();
                let source = error.into_inner();
                if path.is_empty() || path == "." {
                    Err(format!("parse save json: {source}"))
                } else {
                    Err(format!("parse save json at {path}: {source}"))
                }
            }
        }
    }

    pub fn validate(&self) -> ValidationResult<()> {
        let mut seen = HashSet::new();
        for (i, player) in self.players.iter().enumerate() {
            let path = format!("players[{i}]");
            if player.trim().is_empty() {
                return Err(validation_err(&path, "empty player name"));
            }
            if !seen.insert(player.as_str()) {
                return Err(validation_err(&path, format!("duplicate player {player:?}")));
            }
            if !self.scores.contains_key(player) {
                return Err(validation_err(
                    "scores",
                    format!("missing entry for player {player:?}"),
                ));
            }
        }

        let mut seen = HashSet::new();
        for (i, figure) in self.figures.iter().enumerate() {
            if figure.name.trim().is_empty() {
                return Err(validation_err(&format!("figures[{i}].name"), "empty figure name"));
            }
            if !seen.insert(figure.name.as_str()) {
                return Err(validation_err(
                    &format!("figures[{i}].name"),
                    format!("duplicate figure {:?}", figure.name),
                ));
            }
            if !figure.weight.is_finite() || !(0.0..=1.0).contains(&figure.weight) {
                return Err(expected_actual(
                    &format!("figures[{i}].weight"),
                    "number in [0, 1]",
                    figure.weight,
                ));
            }
        }

        for (player, score) in &self.scores {
            if !score.is_finite() {
                return Err(expected_actual(
                    &format!("scores.{player}"),
                    "finite number",
                    score,
                ));
            }
        }
        Ok(())
    }

    /// Validate and convert into a live state
    pub fn into_state(self) -> ValidationResult<GameState> {
        self.validate()?;
        let stale = self
            .scores
            .keys()
            .filter(|name| !self.players.contains(name))
            .count();
        if stale > 0 {
            log::warn!("Save contains {stale} score entries without a player");
        }
        let figures = self
            .figures
            .into_iter()
            .map(|f| Figure {
                name: f.name,
                weight: f.weight,
            })
            .collect();
        Ok(GameState::from_parts(
            self.players,
            figures,
            Story::from(self.story),
            ScoreLedger::from(self.scores),
        ))
    }
}
