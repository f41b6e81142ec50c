//! Collaborator interfaces: everything the engine asks of the outside world.
//!
//! The engine is synchronous. Whenever it needs a decision it calls one of
//! these traits and blocks until an answer comes back:
//! - `PositionSelector`: which card to reveal
//! - `ChoicePrompt`: ability targets (swap, hide, block)
//! - `PeekPresenter`: the start-of-round peek at the three front cards
//! - `MatchObserver`: a feed of everything that happened, for reporting
//!
//! Answers that break the rules are not errors. The engine hands back a
//! [`Rejection`] through the `*_rejected` hook and asks again. Errors
//! returned from a collaborator are fatal and abort the match.
//!
//! Two implementations ship with the crate: [`Console`] for terminal play
//! and [`ScriptedCollaborator`] for replays and tests.

mod console;
mod scripted;

pub use console::Console;
pub use scripted::{ScriptedCollaborator, SelectionRequest};

use serde::{Deserialize, Serialize};

use crate::board::Rejection;
use crate::core::{GameError, PlayerId, Position};
use crate::engine::{MatchEvent, Table};

/// What an ability is asking the player to pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceKind {
    /// Octopus: a neighbour of `origin` to swap with.
    Swap { origin: Position },
    /// Penguin: a face-up card to turn back down.
    Hide,
    /// Walrus: a face-down card to block for the next player.
    Block,
}

/// A finite choice among board positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceRequest {
    pub kind: ChoiceKind,
    pub player: PlayerId,
    /// The only acceptable answers.
    pub candidates: Vec<Position>,
    /// Whether answering "no choice" is allowed.
    pub allow_skip: bool,
}

/// Picks the card a player reveals.
pub trait PositionSelector {
    /// Ask `player` for a face-down card. While `block_active` is set the
    /// blocked cell is off limits.
    fn select_position(
        &mut self,
        table: &Table,
        player: PlayerId,
        block_active: bool,
    ) -> Result<Position, GameError>;

    /// The last answer was refused; `select_position` is called again next.
    fn selection_rejected(
        &mut self,
        _table: &Table,
        _player: PlayerId,
        _rejection: Rejection,
    ) -> Result<(), GameError> {
        Ok(())
    }
}

/// Answers ability choices.
pub trait ChoicePrompt {
    /// Return one of `request.candidates`, or `None` to skip.
    fn choose(&mut self, table: &Table, request: &ChoiceRequest) -> Result<Option<Position>, GameError>;

    /// The last answer was refused; `choose` is called again next.
    fn choice_rejected(
        &mut self,
        _request: &ChoiceRequest,
        _rejection: Rejection,
    ) -> Result<(), GameError> {
        Ok(())
    }
}

/// Shows a player the cards in front of them at round start.
pub trait PeekPresenter {
    /// Called while `positions` are face up. Return once the player is done
    /// looking; the engine turns the cards back down afterwards.
    fn present_peek(
        &mut self,
        table: &Table,
        player: PlayerId,
        positions: &[Position; 3],
    ) -> Result<(), GameError>;
}

/// Receives every event after it has been applied to the table.
pub trait MatchObserver {
    fn observe(&mut self, _table: &Table, _event: &MatchEvent) -> Result<(), GameError> {
        Ok(())
    }
}

/// Everything a match needs from the outside world.
pub trait Collaborator: PositionSelector + ChoicePrompt + PeekPresenter + MatchObserver {}

impl<T> Collaborator for T where T: PositionSelector + ChoicePrompt + PeekPresenter + MatchObserver {}
