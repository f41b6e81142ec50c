//! Pure rule predicates.
//!
//! Nothing here mutates state. The turn engine asks these questions; the
//! answers depend only on the arguments.

use crate::cards::Card;
use crate::core::{Player, PlayerId};

/// Rounds in a match. The match ends once this many have been played.
pub const ROUND_LIMIT: u32 = 7;

/// Rule predicates for matching, round end and match end.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rules;

impl Rules {
    /// Does `current` continue the chain started by `previous`?
    ///
    /// The first reveal of a round (no `previous`) always matches. After
    /// that a card matches if it shares the animal or the background.
    /// Without a `current` card there is nothing to match.
    ///
    /// ```
    /// use memoarrr::cards::{Animal, Background, Card};
    /// use memoarrr::rules::Rules;
    ///
    /// let red_crab = Card::new(Animal::Crab, Background::Red);
    /// let red_turtle = Card::new(Animal::Turtle, Background::Red);
    /// let blue_walrus = Card::new(Animal::Walrus, Background::Blue);
    ///
    /// assert!(Rules::is_valid(None, Some(red_crab)));
    /// assert!(Rules::is_valid(Some(red_crab), Some(red_turtle)));
    /// assert!(!Rules::is_valid(Some(red_turtle), Some(blue_walrus)));
    /// ```
    #[must_use]
    pub fn is_valid(previous: Option<Card>, current: Option<Card>) -> bool {
        match (previous, current) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(prev), Some(curr)) => {
                prev.animal() == curr.animal() || prev.background() == curr.background()
            }
        }
    }

    /// Has the match run its course? `round` counts completed rounds.
    #[must_use]
    pub fn game_over(round: u32) -> bool {
        round >= ROUND_LIMIT
    }

    /// A round ends once at most one player is still active.
    #[must_use]
    pub fn round_over(players: &[Player]) -> bool {
        players.iter().filter(|p| p.is_active()).count() <= 1
    }

    /// The next active player after `from`, scanning circularly.
    ///
    /// `from` itself is checked last. If nobody is active, `from` is
    /// returned unchanged.
    #[must_use]
    pub fn next_player(players: &[Player], from: PlayerId) -> PlayerId {
        let count = players.len();
        if count == 0 {
            return from;
        }

        (1..=count)
            .map(|offset| (from.index() + offset) % count)
            .find(|&index| players[index].is_active())
            .map(|index| players[index].id())
            .unwrap_or(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Animal, Background};
    use crate::core::Side;

    fn roster(active: &[bool]) -> Vec<Player> {
        active
            .iter()
            .enumerate()
            .map(|(i, &on)| {
                let mut p = Player::new(PlayerId::new(i as u8), format!("P{i}"), Side::ALL[i]);
                p.set_active(on);
                p
            })
            .collect()
    }

    #[test]
    fn test_is_valid_without_current() {
        let card = Card::new(Animal::Crab, Background::Red);
        assert!(!Rules::is_valid(Some(card), None));
        assert!(!Rules::is_valid(None, None));
    }

    #[test]
    fn test_is_valid_same_card_face() {
        let card = Card::new(Animal::Penguin, Background::Purple);
        assert!(Rules::is_valid(Some(card), Some(card)));
    }

    #[test]
    fn test_game_over_threshold() {
        assert!(!Rules::game_over(0));
        assert!(!Rules::game_over(6));
        assert!(Rules::game_over(7));
        assert!(Rules::game_over(8));
    }

    #[test]
    fn test_round_over() {
        assert!(!Rules::round_over(&roster(&[true, true])));
        assert!(Rules::round_over(&roster(&[true, false])));
        assert!(Rules::round_over(&roster(&[false, false, false])));
        assert!(!Rules::round_over(&roster(&[false, true, true, false])));
    }

    #[test]
    fn test_next_player_skips_inactive() {
        let players = roster(&[true, false, true, true]);
        assert_eq!(Rules::next_player(&players, PlayerId::new(0)), PlayerId::new(2));
        assert_eq!(Rules::next_player(&players, PlayerId::new(3)), PlayerId::new(0));
        assert_eq!(Rules::next_player(&players, PlayerId::new(1)), PlayerId::new(2));
    }

    #[test]
    fn test_next_player_wraps_to_self() {
        let players = roster(&[false, true, false]);
        assert_eq!(Rules::next_player(&players, PlayerId::new(1)), PlayerId::new(1));
    }

    #[test]
    fn test_next_player_fallback_when_nobody_active() {
        let players = roster(&[false, false, false]);
        assert_eq!(Rules::next_player(&players, PlayerId::new(2)), PlayerId::new(2));
        assert_eq!(Rules::next_player(&[], PlayerId::new(0)), PlayerId::new(0));
    }
}
