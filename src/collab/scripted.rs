//! Collaborator that replays queued answers.
//!
//! Selections and choices are consumed in order. Running out of script is
//! reported as `GameError::InputClosed`, exactly like a console whose
//! input ended. Everything the engine says back (rejections, peeks,
//! events, selection requests) is recorded for inspection.

use std::collections::VecDeque;

use crate::board::Rejection;
use crate::core::{GameError, PlayerId, Position};
use crate::engine::{MatchEvent, Table};

use super::{ChoicePrompt, ChoiceRequest, MatchObserver, PeekPresenter, PositionSelector};

/// A selection request as the engine made it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRequest {
    pub player: PlayerId,
    pub block_active: bool,
}

/// Deterministic collaborator for replays and tests.
///
/// ## Example
///
/// ```
/// use memoarrr::collab::ScriptedCollaborator;
///
/// let script = ScriptedCollaborator::new()
///     .select("A1")
///     .select("b2")
///     .choose("A2")
///     .skip();
/// assert_eq!(script.pending_selections(), 2);
/// assert_eq!(script.pending_choices(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScriptedCollaborator {
    selections: VecDeque<Position>,
    choices: VecDeque<Option<Position>>,
    requests: Vec<SelectionRequest>,
    choice_requests: Vec<ChoiceRequest>,
    rejections: Vec<Rejection>,
    peeks: Vec<(PlayerId, [Position; 3])>,
    events: Vec<MatchEvent>,
}

impl ScriptedCollaborator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a card selection.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a coordinate like `"B3"`.
    #[must_use]
    pub fn select(mut self, pos: &str) -> Self {
        self.selections.push_back(parse(pos));
        self
    }

    #[must_use]
    pub fn select_all<'a>(mut self, positions: impl IntoIterator<Item = &'a str>) -> Self {
        self.selections.extend(positions.into_iter().map(parse));
        self
    }

    /// Queue an ability choice.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is not a coordinate like `"B3"`.
    #[must_use]
    pub fn choose(mut self, pos: &str) -> Self {
        self.choices.push_back(Some(parse(pos)));
        self
    }

    /// Queue a skipped ability choice.
    #[must_use]
    pub fn skip(mut self) -> Self {
        self.choices.push_back(None);
        self
    }

    #[must_use]
    pub fn pending_selections(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn pending_choices(&self) -> usize {
        self.choices.len()
    }

    /// Every selection request, in order.
    #[must_use]
    pub fn requests(&self) -> &[SelectionRequest] {
        &self.requests
    }

    #[must_use]
    pub fn choice_requests(&self) -> &[ChoiceRequest] {
        &self.choice_requests
    }

    #[must_use]
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    #[must_use]
    pub fn peeks(&self) -> &[(PlayerId, [Position; 3])] {
        &self.peeks
    }

    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }
}

fn parse(pos: &str) -> Position {
    match pos.parse() {
        Ok(pos) => pos,
        Err(err) => panic!("bad scripted position: {err}"),
    }
}

impl PositionSelector for ScriptedCollaborator {
    fn select_position(
        &mut self,
        _table: &Table,
        player: PlayerId,
        block_active: bool,
    ) -> Result<Position, GameError> {
        self.requests.push(SelectionRequest {
            player,
            block_active,
        });
        self.selections.pop_front().ok_or(GameError::InputClosed)
    }

    fn selection_rejected(
        &mut self,
        _table: &Table,
        _player: PlayerId,
        rejection: Rejection,
    ) -> Result<(), GameError> {
        self.rejections.push(rejection);
        Ok(())
    }
}

impl ChoicePrompt for ScriptedCollaborator {
    fn choose(&mut self, _table: &Table, request: &ChoiceRequest) -> Result<Option<Position>, GameError> {
        self.choice_requests.push(request.clone());
        self.choices.pop_front().ok_or(GameError::InputClosed)
    }

    fn choice_rejected(
        &mut self,
        _request: &ChoiceRequest,
        rejection: Rejection,
    ) -> Result<(), GameError> {
        self.rejections.push(rejection);
        Ok(())
    }
}

impl PeekPresenter for ScriptedCollaborator {
    fn present_peek(
        &mut self,
        _table: &Table,
        player: PlayerId,
        positions: &[Position; 3],
    ) -> Result<(), GameError> {
        self.peeks.push((player, *positions));
        Ok(())
    }
}

impl MatchObserver for ScriptedCollaborator {
    fn observe(&mut self, _table: &Table, event: &MatchEvent) -> Result<(), GameError> {
        self.events.push(event.clone());
        Ok(())
    }
}
