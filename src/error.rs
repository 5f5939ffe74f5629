//! Error type shared by every command
//!
//! Every variant is recoverable: a failed command leaves the game usable.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("unknown figure: {0}")]
    UnknownFigure(String),
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error("corrupt saved state: {0}")]
    CorruptState(String),
    #[error("duplicate {kind} name: {name}")]
    DuplicateName { kind: &'static str, name: String },
    #[error("{0} cannot be empty")]
    EmptyName(&'static str),
    #[error("storage unavailable: {0}")]
    Storage(String),
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode game document: {0}")]
    Encode(#[from] serde_json::Error),
}

impl GameError {
    /// True for rejections caused by ordinary user input, as opposed to
    /// storage or save-file failures.
    pub fn is_routine(&self) -> bool {
        matches!(
            self,
            GameError::UnknownFigure(_)
                | GameError::UnknownPlayer(_)
                | GameError::DuplicateName { .. }
                | GameError::EmptyName(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::DuplicateName {
            kind: "player",
            name: "Ada".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate player name: Ada");
        assert_eq!(
            GameError::EmptyName("sentence").to_string(),
            "sentence cannot be empty"
        );
    }

    #[test]
    fn test_routine_classification() {
        assert!(GameError::UnknownFigure("x".into()).is_routine());
        assert!(!GameError::CorruptState("bad".into()).is_routine());
        assert!(!GameError::Storage("gone".into()).is_routine());
    }
}
