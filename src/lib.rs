//! # memoarrr
//!
//! Turn and round resolution engine for the Memoarrr! memory-matching card
//! game, for 2-4 players.
//!
//! ## Game in brief
//!
//! 24 cards lie face down on a 5x5 grid around an empty center. Each card
//! shows an animal on a coloured background. Players take turns revealing
//! cards; a reveal must share the animal or the background of the card
//! revealed just before it, otherwise the player is out for the round. The
//! last player standing draws a ruby tile. After seven rounds the richest
//! player wins.
//!
//! In expert mode every matching reveal also triggers its animal's ability
//! (see [`effects`]).
//!
//! ## Design Principles
//!
//! 1. **Synchronous core**: the engine asks collaborators for decisions and
//!    blocks until they answer. See [`collab`].
//!
//! 2. **Arena cards**: the board refers to cards by `CardId` into a shared,
//!    immutable `CardPool`.
//!
//! 3. **Rejections, not errors**: illegal answers are bounced back to the
//!    collaborator as a `Rejection` and asked again. Only real failures
//!    (bad coordinates from code, an exhausted supply, closed input) are
//!    `GameError`s.
//!
//! 4. **Reproducible**: a single seed drives the card and ruby supplies.
//!
//! ## Modules
//!
//! - `core`: positions, players, errors, RNG, configuration
//! - `cards`: card faces, the card pool, refillable supplies
//! - `board`: the grid, its rules of access, text rendering
//! - `rules`: pure predicates (match, round over, game over, turn order)
//! - `effects`: expert-mode animal abilities
//! - `engine`: the table, the turn engine, the match loop, events
//! - `score`: rubies and the final tally
//! - `collab`: collaborator traits, console and scripted implementations

pub mod board;
pub mod cards;
pub mod collab;
pub mod core;
pub mod effects;
pub mod engine;
pub mod rules;
pub mod score;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DisplayMode, GameError, GameRng, MatchConfig, Player, PlayerConfig, PlayerId,
    PlayerRoster, Position, RngStream, RulesMode, Side,
};

pub use crate::cards::{Animal, Background, Card, CardId, CardPool, Supply};

pub use crate::board::{Board, CellState, FaceUpRow, Rejection};

pub use crate::rules::{Rules, ROUND_LIMIT};

pub use crate::effects::{AbilityEffect, AbilityOutcome, AbilityResolver};

pub use crate::engine::{EventLog, Match, MatchEvent, RoundState, Table, TurnEngine, TurnOutcome};

pub use crate::score::{MatchResult, Ruby, ScoreLedger};

pub use crate::collab::{
    ChoiceKind, ChoicePrompt, ChoiceRequest, Collaborator, Console, MatchObserver, PeekPresenter,
    PositionSelector, ScriptedCollaborator,
};
