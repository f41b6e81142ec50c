//! Ruby rewards.
//!
//! ## ScoreLedger
//!
//! Owns the ruby supply: seven tiles worth 1, 1, 1, 2, 2, 3 and 4. Each
//! round winner draws one tile. Once the supply runs dry it is refilled
//! to the same distribution and reshuffled.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Supply;
use crate::core::{GameRng, Player, PlayerId};

use super::result::MatchResult;

/// Ruby tile values in a fresh supply.
pub const RUBY_DISTRIBUTION: [u8; 7] = [1, 1, 1, 2, 2, 3, 4];

/// A ruby tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Ruby(pub u8);

impl Ruby {
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0 as u32
    }
}

impl fmt::Display for Ruby {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", RubyCount(self.value()))
    }
}

/// "1 ruby", "3 rubies".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RubyCount(pub u32);

impl fmt::Display for RubyCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.0 == 1 { "ruby" } else { "rubies" };
        write!(f, "{} {unit}", self.0)
    }
}

/// Reward supply and final tally.
#[derive(Clone, Debug)]
pub struct ScoreLedger {
    supply: Supply<Ruby>,
    rng: GameRng,
}

impl ScoreLedger {
    /// A shuffled standard supply.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_distribution(RUBY_DISTRIBUTION.iter().map(|&v| Ruby(v)).collect(), rng)
    }

    /// A shuffled supply of the given tiles.
    #[must_use]
    pub fn with_distribution(distribution: Vec<Ruby>, mut rng: GameRng) -> Self {
        let mut supply = Supply::new(distribution);
        supply.shuffle(&mut rng);
        Self { supply, rng }
    }

    /// Tiles left before the next refill.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.supply.len()
    }

    /// Draw a tile for `winner` and credit it.
    ///
    /// Returns `None` only when the distribution itself is empty.
    pub fn award_rubies(&mut self, winner: &mut Player) -> Option<Ruby> {
        let ruby = self.supply.draw_or_refill(&mut self.rng)?;
        winner.add_rubies(ruby.value());
        Some(ruby)
    }

    /// Every player holding the most rubies, in seating order.
    #[must_use]
    pub fn final_winners(players: &[Player]) -> Vec<PlayerId> {
        let Some(best) = players.iter().map(Player::rubies).max() else {
            return Vec::new();
        };
        players
            .iter()
            .filter(|p| p.rubies() == best)
            .map(Player::id)
            .collect()
    }

    /// Outcome of the match from the current tallies.
    #[must_use]
    pub fn result(players: &[Player]) -> MatchResult {
        MatchResult::from_winners(Self::final_winners(players))
    }

    /// Players from fewest to most rubies; equal tallies by name.
    #[must_use]
    pub fn standings(players: &[Player]) -> Vec<&Player> {
        let mut ordered: Vec<&Player> = players.iter().collect();
        ordered.sort_by(|a, b| match a.rubies().cmp(&b.rubies()) {
            Ordering::Equal => a.name().cmp(b.name()),
            other => other,
        });
        ordered
    }
}
