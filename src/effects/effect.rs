//! What an ability did.
//!
//! `AbilityOutcome` names the single thing that happened. `AbilityEffect`
//! carries the outcome together with the consequences the turn engine must
//! apply afterwards:
//!
//! - `extra_flip`: the same player reveals again (Crab)
//! - `skip_next`: one more whole turn will be forfeited (Turtle)
//! - `placed_block`: a block was placed for the next player (Walrus)
//! - `resulting_position`: where the revealed card ended up (Octopus moves it)

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// The observable result of one ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AbilityOutcome {
    // === Octopus ===
    /// The revealed card moved from `from` to `to`.
    Swapped { from: Position, to: Position },
    /// No neighbour holds a card.
    NoSwapTarget,

    // === Penguin ===
    Hid(Position),
    /// The first reveal of a round has nothing before it to protect.
    NoPreviousCard,
    NothingToHide,

    // === Walrus ===
    Blocked(Position),
    NothingToBlock,

    /// The player passed on an optional choice (Penguin or Walrus).
    Declined,

    // === Crab / Turtle ===
    ExtraFlip,
    SkipNext,
}

/// Consequences of resolving one ability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEffect {
    pub outcome: AbilityOutcome,
    pub extra_flip: bool,
    pub skip_next: bool,
    pub placed_block: bool,
    pub resulting_position: Position,
}

impl AbilityEffect {
    /// An outcome with no follow-up; the revealed card stays at `position`.
    #[must_use]
    pub fn settled(outcome: AbilityOutcome, position: Position) -> Self {
        Self {
            outcome,
            extra_flip: false,
            skip_next: false,
            placed_block: false,
            resulting_position: position,
        }
    }

    #[must_use]
    pub fn with_extra_flip(mut self) -> Self {
        self.extra_flip = true;
        self
    }

    #[must_use]
    pub fn with_skip_next(mut self) -> Self {
        self.skip_next = true;
        self
    }

    #[must_use]
    pub fn with_block(mut self) -> Self {
        self.placed_block = true;
        self
    }

    #[must_use]
    pub fn moved_to(mut self, position: Position) -> Self {
        self.resulting_position = position;
        self
    }
}
