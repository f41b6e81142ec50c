//! Match outcome.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Who won the match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players share the highest tally.
    Winners(Vec<PlayerId>),
    /// Nobody was seated.
    NoWinner,
}

impl MatchResult {
    #[must_use]
    pub fn from_winners(mut winners: Vec<PlayerId>) -> Self {
        match winners.len() {
            0 => MatchResult::NoWinner,
            1 => MatchResult::Winner(winners.remove(0)),
            _ => MatchResult::Winners(winners),
        }
    }

    /// Check if a player won (alone or shared).
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            MatchResult::Winner(p) => *p == player,
            MatchResult::Winners(ps) => ps.contains(&player),
            MatchResult::NoWinner => false,
        }
    }

    #[must_use]
    pub fn is_tie(&self) -> bool {
        matches!(self, MatchResult::Winners(_))
    }

    #[must_use]
    pub fn winners(&self) -> Vec<PlayerId> {
        match self {
            MatchResult::Winner(p) => vec![*p],
            MatchResult::Winners(ps) => ps.clone(),
            MatchResult::NoWinner => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_winners() {
        assert_eq!(MatchResult::from_winners(vec![]), MatchResult::NoWinner);
        assert_eq!(
            MatchResult::from_winners(vec![PlayerId::new(2)]),
            MatchResult::Winner(PlayerId::new(2))
        );

        let tie = MatchResult::from_winners(vec![PlayerId::new(0), PlayerId::new(1)]);
        assert!(tie.is_tie());
        assert!(tie.is_winner(PlayerId::new(1)));
        assert!(!tie.is_winner(PlayerId::new(2)));
        assert_eq!(tie.winners().len(), 2);
    }
}
