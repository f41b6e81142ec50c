//! Core types: positions, players, errors, RNG, configuration.
//!
//! Everything here is independent of the card rules. The board, the turn
//! engine and the collaborators all build on these.

pub mod config;
pub mod error;
pub mod player;
pub mod position;
pub mod rng;

pub use config::{DisplayMode, MatchConfig, PlayerConfig, RulesMode};
pub use error::{ConfigError, GameError, RangeViolation};
pub use player::{Player, PlayerId, PlayerRoster, Side, MAX_PLAYERS, MIN_PLAYERS};
pub use position::{Column, ParsePositionError, Position, Row, BOARD_SIZE};
pub use rng::{GameRng, RngStream};
