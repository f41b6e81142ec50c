//! Error taxonomy for the engine.
//!
//! Only structural violations unwind out of the core:
//! - `OutOfRange`: addressing the center, a cell outside the grid, or an
//!   empty cell with a card operation
//! - `SupplyExhausted`: the card pool cannot fill the board
//! - `InputClosed` / `Io`: a collaborator lost its input source
//!
//! Bad player answers (malformed coordinates, face-up cells, blocked cells)
//! are not errors. They come back to the collaborator as a [`Rejection`]
//! and the collaborator asks again.
//!
//! [`Rejection`]: crate::board::Rejection

use std::path::PathBuf;

use super::position::Position;

/// Why a position cannot be addressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RangeViolation {
    #[error("center position is empty")]
    Center,

    #[error("coordinates ({row}, {column}) lie outside the board")]
    OffGrid { row: usize, column: usize },

    #[error("no card at {0}")]
    EmptyCell(Position),
}

/// Errors raised by the game engine.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("out of range: {0}")]
    OutOfRange(#[from] RangeViolation),

    #[error("not enough cards to populate the board: need {needed}, have {available}")]
    SupplyExhausted { needed: usize, available: usize },

    #[error("invalid roster: {0}")]
    InvalidRoster(String),

    #[error("input stream closed unexpectedly")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Column, Row};

    #[test]
    fn test_out_of_range_display() {
        let err = GameError::from(RangeViolation::Center);
        assert_eq!(err.to_string(), "out of range: center position is empty");

        let err = GameError::from(RangeViolation::OffGrid { row: 7, column: 2 });
        assert_eq!(
            err.to_string(),
            "out of range: coordinates (7, 2) lie outside the board"
        );

        let err = GameError::from(RangeViolation::EmptyCell(Position::new(Row::B, Column::Four)));
        assert_eq!(err.to_string(), "out of range: no card at B4");
    }

    #[test]
    fn test_supply_exhausted_display() {
        let err = GameError::SupplyExhausted { needed: 24, available: 20 };
        assert_eq!(
            err.to_string(),
            "not enough cards to populate the board: need 24, have 20"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("at most 4 players".to_string());
        assert_eq!(err.to_string(), "config validation error: at most 4 players");
    }
}
