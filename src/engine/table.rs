//! The shared match state.
//!
//! ## Table
//!
//! Everything a collaborator may look at:
//! - the board (with the shared card pool)
//! - the seated players, their activity and their rubies
//! - the number of completed rounds
//! - the event log
//!
//! The turn engine holds the only mutable reference while a match runs;
//! collaborators get `&Table` when they are asked something.

use crate::board::Board;
use crate::collab::MatchObserver;
use crate::core::{GameError, Player, PlayerId, PlayerRoster};
use crate::rules::Rules;

use super::event::{EventLog, MatchEvent};

/// Board, players, round counter and history of one match.
#[derive(Clone, Debug)]
pub struct Table {
    board: Board,
    roster: PlayerRoster,
    /// Completed rounds.
    round: u32,
    log: EventLog,
}

impl Table {
    #[must_use]
    pub fn new(board: Board, roster: PlayerRoster) -> Self {
        Self {
            board,
            roster,
            round: 0,
            log: EventLog::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[must_use]
    pub fn roster(&self) -> &PlayerRoster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut PlayerRoster {
        &mut self.roster
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.roster[id]
    }

    /// Completed rounds.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    pub(crate) fn finish_round(&mut self) {
        self.round += 1;
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        Rules::game_over(self.round)
    }

    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Record `event`, then let the observer see it.
    pub(crate) fn emit<O: MatchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        event: MatchEvent,
    ) -> Result<(), GameError> {
        self.log.push(self.round, event.clone());
        observer.observe(self, &event)
    }
}
