//! The board: a 5x5 grid of cells with an empty center.
//!
//! The board owns visibility (face up / face down) and the single block
//! marker. Cards are referenced by `CardId` into a shared `CardPool`.

mod grid;
mod render;

pub use grid::{Board, Cell, CellState, Rejection, OCCUPIED_CELLS};
pub use render::FaceUpRow;
