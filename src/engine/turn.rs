//! The round state machine.
//!
//! ## Round flow
//!
//! 1. Setup: every card face down, block lifted, all players active,
//!    reveal history and pending effects cleared.
//! 2. Peek: each player in seating order briefly sees the three cards in
//!    front of their side.
//! 3. Turns, starting with the first seat, until at most one player is
//!    active. On their turn a player
//!    - sits out if already inactive,
//!    - forfeits the turn if a Turtle skip is pending,
//!    - is eliminated if no face-down card is left,
//!    - otherwise reveals cards until a mismatch, or until a match that
//!      does not grant an extra flip.
//!
//! Turn order always advances to the next active seat, whatever happened.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::collab::Collaborator;
use crate::core::{GameError, PlayerId, Position, RangeViolation, RulesMode};
use crate::effects::AbilityResolver;
use crate::rules::Rules;

use super::event::MatchEvent;
use super::table::Table;

/// Per-round bookkeeping carried between turns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Card revealed before `current` this round.
    pub previous: Option<CardId>,
    /// Most recently revealed card this round.
    pub current: Option<CardId>,
    /// Seat whose turn comes next.
    pub current_player: PlayerId,
    /// Whole turns still to be forfeited (Turtle).
    pub skip_count: u32,
    /// A block was placed and waits for the next player's turn.
    pub pending_block: bool,
    /// The player on turn must avoid the blocked cell.
    pub block_active: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            previous: None,
            current: None,
            current_player: PlayerId::new(0),
            skip_count: 0,
            pending_block: false,
            block_active: false,
        }
    }
}

impl RoundState {
    fn record_reveal(&mut self, id: CardId) {
        self.previous = self.current.replace(id);
    }
}

/// How a single turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The seat was already out of the round.
    Inactive,
    /// Forfeited to a Turtle.
    Skipped,
    /// Nothing left face down; the player is out.
    Exhausted,
    /// The last reveal mismatched; the player is out.
    Eliminated { reveals: u32 },
    /// Every reveal matched.
    Completed { reveals: u32 },
}

/// Drives rounds on a [`Table`] under one rules mode.
#[derive(Clone, Debug)]
pub struct TurnEngine {
    mode: RulesMode,
    state: RoundState,
}

impl TurnEngine {
    #[must_use]
    pub fn new(mode: RulesMode) -> Self {
        Self {
            mode,
            state: RoundState::default(),
        }
    }

    #[must_use]
    pub fn mode(&self) -> RulesMode {
        self.mode
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Direct access for resuming a round mid-way.
    pub fn state_mut(&mut self) -> &mut RoundState {
        &mut self.state
    }

    /// Reset the table and the round state for a fresh round.
    pub fn setup(&mut self, table: &mut Table) {
        table.board_mut().all_faces_down();
        table.roster_mut().activate_all();
        self.state = RoundState::default();
    }

    /// Show every player the cards in front of their side.
    ///
    /// Only the cards this method turned up are turned back down, so the
    /// board ends exactly as it started.
    pub fn peek_phase<C: Collaborator + ?Sized>(
        &mut self,
        table: &mut Table,
        collab: &mut C,
    ) -> Result<(), GameError> {
        let seats: Vec<_> = table.roster().iter().map(|p| (p.id(), p.side())).collect();

        for (player, side) in seats {
            let positions = side.front_positions();
            let mut flipped = Vec::with_capacity(positions.len());
            for pos in positions {
                if table.board_mut().turn_face_up(pos)? {
                    flipped.push(pos);
                }
            }

            collab.present_peek(table, player, &positions)?;

            for pos in flipped {
                table.board_mut().turn_face_down(pos)?;
            }
            table.emit(collab, MatchEvent::Peeked { player, positions })?;
        }
        Ok(())
    }

    /// Play one round to its end.
    ///
    /// Returns the first active player left, if any. Awarding the round is
    /// up to the caller.
    pub fn play_round<C: Collaborator + ?Sized>(
        &mut self,
        table: &mut Table,
        collab: &mut C,
    ) -> Result<Option<PlayerId>, GameError> {
        self.setup(table);
        let round = table.round() + 1;
        table.emit(collab, MatchEvent::RoundStarted { round })?;
        self.peek_phase(table, collab)?;

        while !Rules::round_over(table.roster().players()) {
            self.play_turn(table, collab)?;
        }

        self.state.previous = None;
        self.state.current = None;
        Ok(table.roster().first_active())
    }

    /// Resolve the turn of the seat on turn, then pass it on.
    pub fn play_turn<C: Collaborator + ?Sized>(
        &mut self,
        table: &mut Table,
        collab: &mut C,
    ) -> Result<TurnOutcome, GameError> {
        let player = self.state.current_player;
        let outcome = self.resolve_turn(table, collab, player)?;
        self.state.current_player = Rules::next_player(table.roster().players(), player);
        Ok(outcome)
    }

    fn resolve_turn<C: Collaborator + ?Sized>(
        &mut self,
        table: &mut Table,
        collab: &mut C,
        player: PlayerId,
    ) -> Result<TurnOutcome, GameError> {
        if !table.player(player).is_active() {
            return Ok(TurnOutcome::Inactive);
        }

        if self.state.skip_count > 0 {
            self.state.skip_count -= 1;
            table.emit(collab, MatchEvent::TurnSkipped { player })?;
            return Ok(TurnOutcome::Skipped);
        }

        if !table.board().has_face_down_cards() {
            table.roster_mut()[player].set_active(false);
            table.emit(collab, MatchEvent::Exhausted { player })?;
            return Ok(TurnOutcome::Exhausted);
        }

        if self.state.pending_block {
            self.state.pending_block = false;
            self.state.block_active = true;
            let position = table.board().blocked_position();
            table.emit(collab, MatchEvent::BlockInEffect { player, position })?;
        }

        let mut reveals = 0;
        loop {
            let (position, card) = self.reveal(table, collab, player)?;
            reveals += 1;

            if !Rules::is_valid(self.card_of(table, self.state.previous), Some(card)) {
                table.roster_mut()[player].set_active(false);
                table.emit(collab, MatchEvent::Mismatch { player })?;
                return Ok(TurnOutcome::Eliminated { reveals });
            }

            if self.mode == RulesMode::Base {
                return Ok(TurnOutcome::Completed { reveals });
            }

            let animal = card.animal();
            let has_previous = self.state.previous.is_some();
            let effect =
                AbilityResolver::resolve(table, collab, player, animal, position, has_previous)?;
            table.emit(
                collab,
                MatchEvent::Ability {
                    player,
                    animal,
                    outcome: effect.outcome,
                },
            )?;

            if effect.skip_next {
                self.state.skip_count += 1;
            }
            if effect.placed_block {
                self.state.pending_block = true;
            }
            if !effect.extra_flip {
                return Ok(TurnOutcome::Completed { reveals });
            }
            if !table.board().has_face_down_cards() {
                table.emit(collab, MatchEvent::ExtraFlipForfeited { player })?;
                return Ok(TurnOutcome::Completed { reveals });
            }
        }
    }

    /// Obtain a legal selection, turn it face up and record it.
    fn reveal<C: Collaborator + ?Sized>(
        &mut self,
        table: &mut Table,
        collab: &mut C,
        player: PlayerId,
    ) -> Result<(Position, Card), GameError> {
        if self.state.block_active && self.only_blocked_left(table) {
            table.board_mut().clear_blocked();
            self.state.block_active = false;
            table.emit(collab, MatchEvent::BlockLifted { player })?;
        }

        let position = loop {
            let pos = collab.select_position(table, player, self.state.block_active)?;
            match table.board().check_selection(pos, self.state.block_active) {
                Ok(()) => break pos,
                Err(rejection) => collab.selection_rejected(table, player, rejection)?,
            }
        };

        table.board_mut().turn_face_up(position)?;
        let id = table
            .board()
            .card_id(position)?
            .ok_or(RangeViolation::EmptyCell(position))?;
        let card = table
            .board()
            .card(position)?
            .ok_or(RangeViolation::EmptyCell(position))?;
        self.state.record_reveal(id);

        if self.state.block_active {
            table.board_mut().clear_blocked();
            self.state.block_active = false;
        }

        table.emit(
            collab,
            MatchEvent::Revealed {
                player,
                position,
                card,
            },
        )?;
        Ok((position, card))
    }

    /// Is the blocked cell the only face-down card left?
    fn only_blocked_left(&self, table: &Table) -> bool {
        let board = table.board();
        match board.blocked_position() {
            Some(blocked) => board.face_down_positions() == [blocked],
            None => false,
        }
    }

    fn card_of(&self, table: &Table, id: Option<CardId>) -> Option<Card> {
        id.and_then(|id| table.board().pool().get(id).copied())
    }
}
