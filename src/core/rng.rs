//! Seeded randomness for a match.
//!
//! A single match seed feeds two independent streams, one per supply:
//! [`RngStream::Cards`] shuffles the card supply before the deal and
//! [`RngStream::Rubies`] orders the ruby tiles. Refilling the ruby supply
//! therefore never changes where the cards lie.
//!
//! ```
//! use memoarrr::core::{GameRng, RngStream};
//!
//! let mut a: Vec<u8> = (0..25).collect();
//! let mut b = a.clone();
//! GameRng::new(42).stream(RngStream::Cards).shuffle(&mut a);
//! GameRng::new(42).stream(RngStream::Cards).shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Which supply a derived generator serves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RngStream {
    Cards,
    Rubies,
}

impl RngStream {
    const fn tag(self) -> u64 {
        match self {
            RngStream::Cards => 0x6361_7264_7300_0001,
            RngStream::Rubies => 0x7275_6269_6573_0002,
        }
    }
}

/// ChaCha8 generator remembering the seed it was built from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generator for one supply, derived from this seed only.
    ///
    /// The derivation is a fixed bit mix, so a seed replays the same match
    /// on every platform and toolchain.
    #[must_use]
    pub fn stream(&self, stream: RngStream) -> Self {
        Self::new(mix(self.seed ^ stream.tag()))
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}

/// SplitMix64 finalizer.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u8> {
        let mut cards: Vec<u8> = (0..25).collect();
        rng.shuffle(&mut cards);
        cards
    }

    #[test]
    fn test_same_seed_same_order() {
        assert_eq!(shuffled(&mut GameRng::new(42)), shuffled(&mut GameRng::new(42)));
        assert_ne!(shuffled(&mut GameRng::new(1)), shuffled(&mut GameRng::new(2)));
    }

    #[test]
    fn test_streams_are_independent() {
        let rng = GameRng::new(42);
        let cards = rng.stream(RngStream::Cards);
        let rubies = rng.stream(RngStream::Rubies);

        assert_ne!(cards.seed(), rubies.seed());
        assert_eq!(cards.seed(), GameRng::new(42).stream(RngStream::Cards).seed());
        assert_ne!(
            shuffled(&mut rng.stream(RngStream::Cards)),
            shuffled(&mut rng.stream(RngStream::Rubies))
        );
    }

    #[test]
    fn test_shuffle_keeps_every_item() {
        let mut order = shuffled(&mut GameRng::new(7));
        assert_ne!(order, (0..25).collect::<Vec<u8>>());
        order.sort_unstable();
        assert_eq!(order, (0..25).collect::<Vec<u8>>());
    }
}
