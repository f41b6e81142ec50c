//! Ability resolution.
//!
//! The `AbilityResolver` applies the expert-mode ability of a freshly
//! revealed card to the board. Choices go through the [`ChoicePrompt`];
//! answers outside the offered candidates are bounced back as a
//! [`Rejection`] until a valid one arrives.

use crate::board::Rejection;
use crate::cards::Animal;
use crate::collab::{ChoiceKind, ChoicePrompt, ChoiceRequest};
use crate::core::{GameError, PlayerId, Position};
use crate::engine::Table;

use super::{AbilityEffect, AbilityOutcome};

/// Resolves animal abilities against the table.
pub struct AbilityResolver;

impl AbilityResolver {
    /// Apply the ability of `animal`, revealed by `player` at `position`.
    ///
    /// `has_previous` tells whether another card was revealed before this
    /// one in the current round (Penguin needs one).
    pub fn resolve<C: ChoicePrompt + ?Sized>(
        table: &mut Table,
        collab: &mut C,
        player: PlayerId,
        animal: Animal,
        position: Position,
        has_previous: bool,
    ) -> Result<AbilityEffect, GameError> {
        match animal {
            Animal::Octopus => Self::octopus(table, collab, player, position),
            Animal::Penguin => Self::penguin(table, collab, player, position, has_previous),
            Animal::Walrus => Self::walrus(table, collab, player, position),
            Animal::Crab => {
                Ok(AbilityEffect::settled(AbilityOutcome::ExtraFlip, position).with_extra_flip())
            }
            Animal::Turtle => {
                Ok(AbilityEffect::settled(AbilityOutcome::SkipNext, position).with_skip_next())
            }
        }
    }

    /// Swap the revealed card with an occupied orthogonal neighbour.
    fn octopus<C: ChoicePrompt + ?Sized>(
        table: &mut Table,
        collab: &mut C,
        player: PlayerId,
        origin: Position,
    ) -> Result<AbilityEffect, GameError> {
        let board = table.board();
        let candidates: Vec<Position> = origin
            .orthogonal_neighbours()
            .into_iter()
            .filter(|p| !p.is_center())
            .filter(|&p| matches!(board.card_id(p), Ok(Some(_))))
            .collect();

        if candidates.is_empty() {
            return Ok(AbilityEffect::settled(AbilityOutcome::NoSwapTarget, origin));
        }

        let request = ChoiceRequest {
            kind: ChoiceKind::Swap { origin },
            player,
            candidates,
            allow_skip: false,
        };
        match Self::ask(table, collab, &request)? {
            Some(target) => {
                table.board_mut().swap_cells(origin, target)?;
                let outcome = AbilityOutcome::Swapped {
                    from: origin,
                    to: target,
                };
                Ok(AbilityEffect::settled(outcome, origin).moved_to(target))
            }
            None => Ok(AbilityEffect::settled(AbilityOutcome::Declined, origin)),
        }
    }

    /// Optionally turn another face-up card back down.
    fn penguin<C: ChoicePrompt + ?Sized>(
        table: &mut Table,
        collab: &mut C,
        player: PlayerId,
        position: Position,
        has_previous: bool,
    ) -> Result<AbilityEffect, GameError> {
        if !has_previous {
            return Ok(AbilityEffect::settled(AbilityOutcome::NoPreviousCard, position));
        }

        let candidates: Vec<Position> = table
            .board()
            .face_up_cards()
            .into_iter()
            .map(|(pos, _)| pos)
            .filter(|&pos| pos != position)
            .collect();
        if candidates.is_empty() {
            return Ok(AbilityEffect::settled(AbilityOutcome::NothingToHide, position));
        }

        let request = ChoiceRequest {
            kind: ChoiceKind::Hide,
            player,
            candidates,
            allow_skip: true,
        };
        match Self::ask(table, collab, &request)? {
            Some(target) => {
                table.board_mut().turn_face_down(target)?;
                Ok(AbilityEffect::settled(AbilityOutcome::Hid(target), position))
            }
            None => Ok(AbilityEffect::settled(AbilityOutcome::Declined, position)),
        }
    }

    /// Optionally block a face-down card for the next player.
    fn walrus<C: ChoicePrompt + ?Sized>(
        table: &mut Table,
        collab: &mut C,
        player: PlayerId,
        position: Position,
    ) -> Result<AbilityEffect, GameError> {
        let candidates = table.board().face_down_positions();
        if candidates.is_empty() {
            return Ok(AbilityEffect::settled(AbilityOutcome::NothingToBlock, position));
        }

        let request = ChoiceRequest {
            kind: ChoiceKind::Block,
            player,
            candidates,
            allow_skip: true,
        };
        match Self::ask(table, collab, &request)? {
            Some(target) => {
                let board = table.board_mut();
                board.clear_blocked();
                board.set_blocked(target, true)?;
                Ok(AbilityEffect::settled(AbilityOutcome::Blocked(target), position).with_block())
            }
            None => Ok(AbilityEffect::settled(AbilityOutcome::Declined, position)),
        }
    }

    /// Ask until the answer is a candidate, or a permitted skip.
    fn ask<C: ChoicePrompt + ?Sized>(
        table: &Table,
        collab: &mut C,
        request: &ChoiceRequest,
    ) -> Result<Option<Position>, GameError> {
        loop {
            let rejection = match collab.choose(table, request)? {
                None if request.allow_skip => return Ok(None),
                None => Rejection::SkipNotAllowed,
                Some(pos) if request.candidates.contains(&pos) => return Ok(Some(pos)),
                Some(pos) => match request.kind {
                    ChoiceKind::Block => table
                        .board()
                        .check_selection(pos, false)
                        .err()
                        .unwrap_or(Rejection::NotOffered(pos)),
                    _ => Rejection::NotOffered(pos),
                },
            };
            collab.choice_rejected(request, rejection)?;
        }
    }
}
