//! Error kinds reported at the core boundary.
//!
//! Resolution and spawning are total over well-formed input, so every variant
//! here describes malformed input rejected before any state is touched.

use thiserror::Error;

use crate::types::Tile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid direction '{input}' (expected left, right, up or down)")]
    InvalidDirection { input: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("invalid tile {tile}: {reason}")]
    InvalidTile { tile: Tile, reason: &'static str },
}

impl GameError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        GameError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = GameError::InvalidDirection {
            input: "north".to_string(),
        };
        assert!(err.to_string().contains("'north'"));

        let err = GameError::InvalidTile {
            tile: Tile::new(3, 1, 2),
            reason: "value must be a power of two",
        };
        assert_eq!(
            err.to_string(),
            "invalid tile 3 at (1, 2): value must be a power of two"
        );

        assert_eq!(
            GameError::config("grid size must be at least 1").to_string(),
            "invalid configuration: grid size must be at least 1"
        );
    }
}
