//! Cards, the card pool, and drawable supplies.
//!
//! - `Card`: immutable (animal, background) face
//! - `CardPool`: arena owning every card of a match, addressed by `CardId`
//! - `Supply<T>`: refillable pile used for both cards and rubies

mod card;
mod pool;
mod supply;

pub use card::{Animal, Background, Card, CardId};
pub use pool::CardPool;
pub use supply::Supply;
