//! Ranked standings
//!
//! Built on demand from a game state; nothing here is persisted.

use serde::Serialize;

use crate::game::{Figure, GameState};

/// A single leaderboard row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    /// 1-indexed rank
    pub rank: usize,
    pub player: String,
    pub score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Leaderboard {
    pub entries: Vec<Standing>,
}

impl Leaderboard {
    /// Rank every listed player by score, highest first.
    ///
    /// Equal scores keep the order players were added in.
    pub fn from_state(state: &GameState) -> Self {
        let mut rows: Vec<(&String, f64)> = state
            .players()
            .iter()
            .filter_map(|p| state.score_of(p).map(|s| (p, s)))
            .collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1));

        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(i, (player, score))| Standing {
                rank: i + 1,
                player: player.clone(),
                score,
            })
            .collect();
        Self { entries }
    }

    pub fn leader(&self) -> Option<&Standing> {
        self.entries.first()
    }

    pub fn rank_of(&self, player: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|e| e.player == player)
            .map(|e| e.rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Figures ordered easiest first, then by name
pub fn figures_by_weight(state: &GameState) -> Vec<&Figure> {
    let mut figures: Vec<&Figure> = state.figures().iter().collect();
    figures.sort_by(|a, b| a.weight.total_cmp(&b.weight).then_with(|| a.name.cmp(&b.name)));
    figures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::SignFlip;

    fn sample() -> GameState {
        let mut state = GameState::new();
        for p in ["Cleo", "Ada", "Bob"] {
            state.add_player(p).unwrap();
        }
        state.add_figure("Zeugma").unwrap();
        state.add_figure("Anaphora").unwrap();
        state
    }

    #[test]
    fn test_ranks_by_score_descending() {
        let mut state = sample();
        state.record("Ada", "Zeugma", true, &SignFlip).unwrap();
        state.record("Bob", "Zeugma", false, &SignFlip).unwrap();

        let board = Leaderboard::from_state(&state);
        let order: Vec<_> = board.entries.iter().map(|e| e.player.as_str()).collect();
        assert_eq!(order, vec!["Ada", "Cleo", "Bob"]);
        assert_eq!(board.leader().unwrap().score, 0.5);
        assert_eq!(board.rank_of("Bob"), Some(3));
        assert_eq!(board.rank_of("Nobody"), None);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let board = Leaderboard::from_state(&sample());
        let order: Vec<_> = board.entries.iter().map(|e| e.player.as_str()).collect();
        assert_eq!(order, vec!["Cleo", "Ada", "Bob"]);
    }

    #[test]
    fn test_empty_state() {
        assert!(Leaderboard::from_state(&GameState::new()).is_empty());
    }

    #[test]
    fn test_figures_by_weight() {
        let mut state = sample();
        let names: Vec<_> = figures_by_weight(&state)
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Anaphora", "Zeugma"]);

        // Correct answer lowers Zeugma's weight below the default
        state.record("Ada", "Zeugma", true, &SignFlip).unwrap();
        state.record("Ada", "Anaphora", false, &SignFlip).unwrap();
        let names: Vec<_> = figures_by_weight(&state)
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["Zeugma", "Anaphora"]);
    }
}
