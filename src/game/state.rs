//! Game state aggregate
//!
//! Everything that is saved and restored lives here: players, figures, the
//! story and the score ledger.

use serde::Serialize;

use super::difficulty::Difficulty;
use super::ledger::ScoreLedger;
use super::story::Story;
use crate::consts::INITIAL_WEIGHT;
use crate::error::{GameError, Result};

/// A named figure players attempt, with its adaptive weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub name: String,
    /// Always within [0, 1]
    pub weight: f64,
}

impl Figure {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            weight: INITIAL_WEIGHT,
        }
    }
}

/// What a single judgment changed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordOutcome {
    pub player: String,
    pub figure: String,
    pub correct: bool,
    pub previous_weight: f64,
    pub new_weight: f64,
    pub score_delta: f64,
    /// Player's total after the delta was applied
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GameState {
    players: Vec<String>,
    figures: Vec<Figure>,
    story: Story,
    scores: ScoreLedger,
}

/// Reject empty or whitespace-only input
fn require_text(kind: &'static str, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(GameError::EmptyName(kind));
    }
    Ok(())
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a state from already-validated parts
    pub(crate) fn from_parts(
        players: Vec<String>,
        figures: Vec<Figure>,
        story: Story,
        scores: ScoreLedger,
    ) -> Self {
        Self {
            players,
            figures,
            story,
            scores,
        }
    }

    pub fn add_player(&mut self, name: &str) -> Result<()> {
        require_text("player", name)?;
        if self.has_player(name) {
            return Err(GameError::DuplicateName {
                kind: "player",
                name: name.to_string(),
            });
        }
        self.players.push(name.to_string());
        self.scores.open(name);
        Ok(())
    }

    pub fn add_figure(&mut self, name: &str) -> Result<()> {
        require_text("figure", name)?;
        if self.figure(name).is_some() {
            return Err(GameError::DuplicateName {
                kind: "figure",
                name: name.to_string(),
            });
        }
        self.figures.push(Figure::new(name));
        Ok(())
    }

    pub fn append_story(&mut self, sentence: &str) -> Result<()> {
        require_text("sentence", sentence)?;
        self.story.push(sentence);
        Ok(())
    }

    /// Judge one attempt of `player` at `figure`.
    ///
    /// Either both the figure weight and the player score change, or
    /// nothing does.
    pub fn record<D: Difficulty + ?Sized>(
        &mut self,
        player: &str,
        figure: &str,
        correct: bool,
        difficulty: &D,
    ) -> Result<RecordOutcome> {
        let index = self
            .figures
            .iter()
            .position(|f| f.name == figure)
            .ok_or_else(|| GameError::UnknownFigure(figure.to_string()))?;
        if !self.scores.contains(player) {
            return Err(GameError::UnknownPlayer(player.to_string()));
        }

        let previous_weight = self.figures[index].weight;
        let adjustment = difficulty.adjust(previous_weight, correct);
        let score = self.scores.apply(player, adjustment.score_delta)?;
        self.figures[index].weight = adjustment.new_weight;

        Ok(RecordOutcome {
            player: player.to_string(),
            figure: figure.to_string(),
            correct,
            previous_weight,
            new_weight: adjustment.new_weight,
            score_delta: adjustment.score_delta,
            score,
        })
    }

    /// Owned copy for rendering or saving
    pub fn snapshot(&self) -> GameState {
        self.clone()
    }

    /// Swap in a whole new aggregate
    pub fn replace(&mut self, new_state: GameState) {
        *self = new_state;
    }

    pub fn players(&self) -> &[String] {
        &self.players
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }

    pub fn figure(&self, name: &str) -> Option<&Figure> {
        self.figures.iter().find(|f| f.name == name)
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn scores(&self) -> &ScoreLedger {
        &self.scores
    }

    pub fn score_of(&self, player: &str) -> Option<f64> {
        self.scores.get(player)
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.figures.is_empty() && self.story.is_empty()
    }
}
