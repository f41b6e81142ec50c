//! The card pool arena.
//!
//! `CardPool` owns every `Card` of a match. The board never stores cards,
//! only `CardId`s, so nothing on the board can outlive the cards it names.
//! The pool is immutable after construction and shared through `Arc`.

use super::card::{Animal, Background, Card, CardId};
use super::supply::Supply;

/// Immutable set of distinct cards addressed by `CardId`.
///
/// ## Example
///
/// ```
/// use memoarrr::cards::{Animal, Background, CardPool};
///
/// let pool = CardPool::standard();
/// assert_eq!(pool.len(), 25);
///
/// let id = pool.find(Animal::Turtle, Background::Green).unwrap();
/// assert_eq!(pool.get(id).unwrap().animal(), Animal::Turtle);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardPool {
    cards: Vec<Card>,
}

impl CardPool {
    /// The full 25-card cross product of animals and backgrounds.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Animal::ALL
            .iter()
            .flat_map(|&animal| {
                Background::ALL
                    .iter()
                    .map(move |&background| Card::new(animal, background))
            })
            .collect();
        Self { cards }
    }

    /// Build a pool from explicit cards. Duplicates are dropped, first one wins.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut unique: Vec<Card> = Vec::new();
        for card in cards {
            if !unique.contains(&card) {
                unique.push(card);
            }
        }
        Self { cards: unique }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Look up the id of a face.
    #[must_use]
    pub fn find(&self, animal: Animal, background: Background) -> Option<CardId> {
        self.cards
            .iter()
            .position(|c| c.animal() == animal && c.background() == background)
            .map(|i| CardId::new(i as u8))
    }

    /// All ids in pool order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> {
        (0..self.cards.len() as u8).map(CardId::new)
    }

    /// Iterate over `(CardId, &Card)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, c)| (CardId::new(i as u8), c))
    }

    /// An unshuffled supply holding every card of the pool once.
    #[must_use]
    pub fn supply(&self) -> Supply<CardId> {
        Supply::new(self.ids().collect())
    }
}
