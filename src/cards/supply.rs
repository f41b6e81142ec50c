//! A drawable supply of values.
//!
//! `Supply<T>` remembers the distribution it was built from, so it can be
//! refilled to that exact multiset once drawn dry. The same type backs the
//! board's card supply and the ruby reward supply.

use crate::core::GameRng;

/// A refillable, shuffleable pile. Draws come off the top (the back).
///
/// ## Example
///
/// ```
/// use memoarrr::cards::Supply;
///
/// let mut supply = Supply::new(vec![1, 2, 3]);
/// assert_eq!(supply.draw(), Some(3));
/// assert_eq!(supply.len(), 2);
///
/// supply.refill();
/// assert_eq!(supply.len(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Supply<T> {
    distribution: Vec<T>,
    items: Vec<T>,
}

impl<T: Clone> Supply<T> {
    /// Create a full supply holding `distribution`.
    #[must_use]
    pub fn new(distribution: Vec<T>) -> Self {
        Self {
            items: distribution.clone(),
            distribution,
        }
    }

    /// Restore the original distribution, discarding what is left.
    pub fn refill(&mut self) {
        self.items = self.distribution.clone();
    }

    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.items);
    }

    /// Take the top item, or `None` once the supply is dry.
    pub fn draw(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Take the top item, refilling and reshuffling first if dry.
    ///
    /// Returns `None` only when the distribution itself is empty.
    pub fn draw_or_refill(&mut self, rng: &mut GameRng) -> Option<T> {
        if self.items.is_empty() {
            self.refill();
            self.shuffle(rng);
        }
        self.draw()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remaining items, bottom first.
    #[must_use]
    pub fn remaining(&self) -> &[T] {
        &self.items
    }
}
