//! Match events and the event log.
//!
//! Every state transition the engine makes is described by a
//! `MatchEvent`. Events are appended to the table's `EventLog` and then
//! handed to the `MatchObserver`, which is how reporters learn what
//! happened.
//!
//! The log uses `im::Vector` so a snapshot of the table can be cloned
//! without copying the whole history.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Animal, Card};
use crate::core::{PlayerId, Position};
use crate::effects::AbilityOutcome;
use crate::score::Ruby;

/// Something that happened during a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A round began. `round` is 1-based.
    RoundStarted { round: u32 },

    /// A player looked at the cards in front of them.
    Peeked {
        player: PlayerId,
        positions: [Position; 3],
    },

    /// A whole turn was forfeited to a pending Turtle skip.
    TurnSkipped { player: PlayerId },

    /// No face-down card was left for the player to reveal.
    Exhausted { player: PlayerId },

    /// The player must avoid the blocked card this turn.
    BlockInEffect {
        player: PlayerId,
        position: Option<Position>,
    },

    /// The blocked card was the only one left face down, so the block was
    /// dropped before the player chose.
    BlockLifted { player: PlayerId },

    /// A card was turned face up.
    Revealed {
        player: PlayerId,
        position: Position,
        card: Card,
    },

    /// The revealed card did not match; the player is out of the round.
    Mismatch { player: PlayerId },

    /// An expert-mode ability resolved.
    Ability {
        player: PlayerId,
        animal: Animal,
        outcome: AbilityOutcome,
    },

    /// A Crab asked for another flip but nothing was left face down.
    ExtraFlipForfeited { player: PlayerId },

    /// The last active player won the round.
    RoundWon {
        player: PlayerId,
        ruby: Option<Ruby>,
    },

    /// Nobody was left active at the end of the round.
    NoRoundWinner,

    /// All rounds have been played.
    MatchOver { winners: Vec<PlayerId> },
}

/// An event stamped with the number of rounds completed before it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub round: u32,
    pub event: MatchEvent,
}

/// Append-only history of a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    records: Vector<EventRecord>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, round: u32, event: MatchEvent) {
        self.records.push_back(EventRecord { round, event });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&EventRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EventRecord> {
        self.records.iter()
    }

    /// Events only, in order.
    pub fn events(&self) -> impl Iterator<Item = &MatchEvent> {
        self.records.iter().map(|r| &r.event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_order() {
        let mut log = EventLog::new();
        assert!(log.is_empty());

        log.push(0, MatchEvent::RoundStarted { round: 1 });
        log.push(0, MatchEvent::Mismatch { player: PlayerId::new(1) });
        log.push(1, MatchEvent::NoRoundWinner);

        assert_eq!(log.len(), 3);
        assert_eq!(log.last().unwrap().round, 1);
        let events: Vec<_> = log.events().cloned().collect();
        assert_eq!(events[1], MatchEvent::Mismatch { player: PlayerId::new(1) });
    }

    #[test]
    fn test_clone_shares_history() {
        let mut log = EventLog::new();
        log.push(0, MatchEvent::RoundStarted { round: 1 });
        let snapshot = log.clone();
        log.push(0, MatchEvent::NoRoundWinner);

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_event_serialization() {
        let event = MatchEvent::Ability {
            player: PlayerId::new(0),
            animal: Animal::Octopus,
            outcome: AbilityOutcome::Swapped {
                from: "B2".parse().unwrap(),
                to: "B3".parse().unwrap(),
            },
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: MatchEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
