//! Expert-mode animal abilities.
//!
//! When a revealed card matches in expert mode, its animal acts:
//! - Octopus: swap the card with an orthogonal neighbour (required)
//! - Penguin: turn another face-up card back down (optional)
//! - Walrus: block a face-down card for the next player (optional)
//! - Crab: the player must reveal again
//! - Turtle: the next player's turn is skipped
//!
//! `AbilityResolver` mutates the board and reports an `AbilityEffect`;
//! the turn engine applies the follow-ups (extra flip, skip, block).

mod effect;
mod resolver;

pub use effect::{AbilityEffect, AbilityOutcome};
pub use resolver::AbilityResolver;
