//! Save/load of the game document
//!
//! Features:
//! - Plain JSON document mirroring the game state
//! - Path-qualified parse errors
//! - Validation before anything replaces the live state

mod document;

pub use document::{FigureRecord, SaveDocument};

use crate::error::{GameError, Result};
use crate::game::GameState;

/// Encode the whole state as a JSON document
pub fn save(state: &GameState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

/// Decode and validate a JSON document into a fresh state
pub fn load(raw: &str) -> Result<GameState> {
    let document = SaveDocument::parse(raw).map_err(GameError::CorruptState)?;
    document.into_state().map_err(GameError::CorruptState)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{DifficultyPolicy, GameState};
    use proptest::prelude::*;

    fn played_state() -> GameState {
        let mut state = GameState::new();
        state.add_player("Ada").unwrap();
        state.add_player("Bob").unwrap();
        state.add_figure("Anaphora").unwrap();
        state.add_figure("Litotes").unwrap();
        state.append_story("It was not a bad night.").unwrap();
        state
            .record("Ada", "Litotes", true, &DifficultyPolicy::SignFlip)
            .unwrap();
        state
            .record("Bob", "Anaphora", false, &DifficultyPolicy::AdditiveDelta)
            .unwrap();
        state
    }

    #[test]
    fn test_round_trip() {
        let state = played_state();
        let raw = save(&state).unwrap();
        assert_eq!(load(&raw).unwrap(), state);
    }

    #[test]
    fn test_round_trip_empty() {
        let state = GameState::new();
        assert_eq!(load(&save(&state).unwrap()).unwrap(), state);
    }

    #[test]
    fn test_load_rejects_garbage() {
        assert!(matches!(load("not json"), Err(GameError::CorruptState(_))));
        assert!(matches!(load("null"), Err(GameError::CorruptState(_))));
    }

    #[test]
    fn test_load_rejects_trailing_garbage() {
        let raw = r#"{"players":[],"figures":[],"story":[],"scores":{}} trailing junk"#;
        assert!(matches!(load(raw), Err(GameError::CorruptState(_))));
    }

    #[test]
    fn test_load_reports_missing_field() {
        let raw = r#"{"players": [], "figures": [], "story": []}"#;
        let err = load(raw).unwrap_err();
        assert!(matches!(err, GameError::CorruptState(ref msg) if msg.contains("scores")));
    }

    #[test]
    fn test_load_reports_path_of_wrong_type() {
        let raw = r#"{"players": ["Ada"], "figures": [{"name": "X", "weight": "hard"}],
                      "story": [], "scores": {"Ada": 0}}"#;
        let err = load(raw).unwrap_err();
        assert!(matches!(err, GameError::CorruptState(ref msg) if msg.contains("figures[0].weight")));
    }

    proptest! {
        #[test]
        fn prop_round_trip_reachable_states(
            players in prop::collection::btree_set("[a-z]{1,8}", 1..5),
            figures in prop::collection::btree_set("[A-Z][a-z]{1,10}", 1..5),
            story in prop::collection::vec("[a-z ]{0,20}[a-z]", 0..5),
            judgments in prop::collection::vec((any::<usize>(), any::<usize>(), any::<bool>(), any::<bool>()), 0..30),
        ) {
            let players: Vec<String> = players.into_iter().collect();
            let figures: Vec<String> = figures.into_iter().collect();
            let mut state = GameState::new();
            for p in &players {
                state.add_player(p).unwrap();
            }
            for f in &figures {
                state.add_figure(f).unwrap();
            }
            for s in &story {
                state.append_story(s).unwrap();
            }
            for (pi, fi, correct, flip) in judgments {
                let policy = if flip { DifficultyPolicy::SignFlip } else { DifficultyPolicy::AdditiveDelta };
                state
                    .record(&players[pi % players.len()], &figures[fi % figures.len()], correct, &policy)
                    .unwrap();
            }
            let restored = load(&save(&state).unwrap()).unwrap();
            prop_assert_eq!(restored, state);
        }
    }
}
