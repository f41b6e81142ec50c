//! The 5x5 card grid.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardPool, Supply};
use crate::core::{GameError, Position, RangeViolation, BOARD_SIZE};

/// Number of card-bearing cells (every cell but the center).
pub const OCCUPIED_CELLS: usize = BOARD_SIZE * BOARD_SIZE - 1;

/// One grid location.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    card: Option<CardId>,
    face_up: bool,
    blocked: bool,
}

impl Cell {
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        self.card
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }
}

/// What a renderer sees at a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    /// The center, or a cell without a card.
    Empty,
    FaceDown { blocked: bool },
    FaceUp { card: Card, blocked: bool },
}

/// Why a selected position was refused. The collaborator asks again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The center, or a cell without a card.
    Unavailable(Position),
    AlreadyFaceUp(Position),
    /// The cell is blocked for the player choosing.
    Blocked(Position),
    /// Not among the positions offered by a choice.
    NotOffered(Position),
    /// The choice must be answered.
    SkipNotAllowed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Unavailable(_) => write!(f, "That position cannot be selected."),
            Rejection::AlreadyFaceUp(pos) => write!(f, "Card {pos} is already face up."),
            Rejection::Blocked(_) => {
                write!(f, "That card is blocked for this turn. Choose another.")
            }
            Rejection::NotOffered(_) => write!(f, "That card is not eligible."),
            Rejection::SkipNotAllowed => write!(f, "A card must be chosen."),
        }
    }
}

/// The playing grid.
///
/// Cells refer to cards by `CardId`; the `CardPool` itself is shared and
/// never mutated. Which card sits where only changes through
/// [`Board::swap_cells`]. At most one cell is blocked at a time as long as
/// callers clear the old block before setting a new one.
#[derive(Clone, Debug)]
pub struct Board {
    pool: Arc<CardPool>,
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Deal the board from the top of `supply`, row-major, skipping the
    /// center. All cards start face down.
    ///
    /// Fails with `SupplyExhausted` if the supply runs dry before all 24
    /// cells are filled. Ids unknown to `pool` are discarded.
    pub fn new(pool: Arc<CardPool>, supply: &mut Supply<CardId>) -> Result<Self, GameError> {
        let mut grid = [[Cell::default(); BOARD_SIZE]; BOARD_SIZE];
        let mut placed = 0;

        for pos in Position::all().filter(|p| !p.is_center()) {
            let card = loop {
                match supply.draw() {
                    Some(id) if pool.get(id).is_some() => break id,
                    Some(_) => continue,
                    None => {
                        return Err(GameError::SupplyExhausted {
                            needed: OCCUPIED_CELLS,
                            available: placed,
                        })
                    }
                }
            };
            grid[pos.row.index()][pos.column.index()].card = Some(card);
            placed += 1;
        }

        Ok(Self { pool, grid })
    }

    /// The pool the board's card ids refer to.
    #[must_use]
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    fn cell(&self, pos: Position) -> Result<&Cell, GameError> {
        if pos.is_center() {
            return Err(RangeViolation::Center.into());
        }
        Ok(&self.grid[pos.row.index()][pos.column.index()])
    }

    fn cell_mut(&mut self, pos: Position) -> Result<&mut Cell, GameError> {
        if pos.is_center() {
            return Err(RangeViolation::Center.into());
        }
        Ok(&mut self.grid[pos.row.index()][pos.column.index()])
    }

    fn occupied_cell_mut(&mut self, pos: Position) -> Result<&mut Cell, GameError> {
        let cell = self.cell_mut(pos)?;
        if cell.card.is_none() {
            return Err(RangeViolation::EmptyCell(pos).into());
        }
        Ok(cell)
    }

    // === Queries ===

    pub fn is_face_up(&self, pos: Position) -> Result<bool, GameError> {
        Ok(self.cell(pos)?.face_up)
    }

    pub fn is_blocked(&self, pos: Position) -> Result<bool, GameError> {
        Ok(self.cell(pos)?.blocked)
    }

    /// Id of the card at `pos`, if any.
    pub fn card_id(&self, pos: Position) -> Result<Option<CardId>, GameError> {
        Ok(self.cell(pos)?.card)
    }

    /// Face of the card at `pos`, if any.
    pub fn card(&self, pos: Position) -> Result<Option<Card>, GameError> {
        Ok(self.card_id(pos)?.and_then(|id| self.pool.get(id).copied()))
    }

    /// Renderer view of one position. Never fails: the center is `Empty`.
    #[must_use]
    pub fn cell_state(&self, pos: Position) -> CellState {
        if pos.is_center() {
            return CellState::Empty;
        }
        let cell = &self.grid[pos.row.index()][pos.column.index()];
        match cell.card.and_then(|id| self.pool.get(id)) {
            None => CellState::Empty,
            Some(_) if !cell.face_up => CellState::FaceDown { blocked: cell.blocked },
            Some(card) => CellState::FaceUp {
                card: *card,
                blocked: cell.blocked,
            },
        }
    }

    /// Renderer view of the whole grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        Position::all().map(move |pos| (pos, self.cell_state(pos)))
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.card.is_some())
            .count()
    }

    /// True iff at least one card is still face down.
    #[must_use]
    pub fn has_face_down_cards(&self) -> bool {
        self.grid
            .iter()
            .flatten()
            .any(|cell| cell.card.is_some() && !cell.face_up)
    }

    /// Positions of face-down cards in row-major order.
    #[must_use]
    pub fn face_down_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, state)| matches!(state, CellState::FaceDown { .. }))
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Every visible card with its position, in row-major order.
    #[must_use]
    pub fn face_up_cards(&self) -> Vec<(Position, Card)> {
        self.cells()
            .filter_map(|(pos, state)| match state {
                CellState::FaceUp { card, .. } => Some((pos, card)),
                _ => None,
            })
            .collect()
    }

    /// The blocked cell, if any.
    #[must_use]
    pub fn blocked_position(&self) -> Option<Position> {
        Position::all().find(|&pos| self.is_blocked(pos).unwrap_or(false))
    }

    /// Can `pos` be revealed right now?
    ///
    /// `block_active` is true when the player choosing must avoid the
    /// blocked cell.
    pub fn check_selection(&self, pos: Position, block_active: bool) -> Result<(), Rejection> {
        let cell = match self.cell(pos) {
            Ok(cell) if cell.card.is_some() => cell,
            _ => return Err(Rejection::Unavailable(pos)),
        };
        if block_active && cell.blocked {
            return Err(Rejection::Blocked(pos));
        }
        if cell.face_up {
            return Err(Rejection::AlreadyFaceUp(pos));
        }
        Ok(())
    }

    // === Mutations ===

    /// Turn a card face up. Returns `false`, changing nothing, if it
    /// already was.
    pub fn turn_face_up(&mut self, pos: Position) -> Result<bool, GameError> {
        let cell = self.occupied_cell_mut(pos)?;
        if cell.face_up {
            return Ok(false);
        }
        cell.face_up = true;
        Ok(true)
    }

    /// Turn a card face down. Returns `false`, changing nothing, if it
    /// already was.
    pub fn turn_face_down(&mut self, pos: Position) -> Result<bool, GameError> {
        let cell = self.occupied_cell_mut(pos)?;
        if !cell.face_up {
            return Ok(false);
        }
        cell.face_up = false;
        Ok(true)
    }

    /// Set or clear the block marker on one cell.
    ///
    /// Does not touch other cells: call [`Board::clear_blocked`] first to
    /// keep a single block on the board.
    pub fn set_blocked(&mut self, pos: Position, blocked: bool) -> Result<(), GameError> {
        self.cell_mut(pos)?.blocked = blocked;
        Ok(())
    }

    pub fn clear_blocked(&mut self) {
        for cell in self.grid.iter_mut().flatten() {
            cell.blocked = false;
        }
    }

    /// Turn every card face down and lift any block.
    pub fn all_faces_down(&mut self) {
        for cell in self.grid.iter_mut().flatten() {
            cell.face_up = false;
            cell.blocked = false;
        }
    }

    /// Exchange everything held by two cells: card, face and block.
    ///
    /// Swapping the same pair twice restores the board.
    pub fn swap_cells(&mut self, a: Position, b: Position) -> Result<(), GameError> {
        let first = *self.cell(a)?;
        let second = *self.cell(b)?;
        *self.cell_mut(a)? = second;
        *self.cell_mut(b)? = first;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Column, Row};

    fn board() -> Board {
        let pool = Arc::new(CardPool::standard());
        let mut supply = pool.supply();
        Board::new(pool, &mut supply).unwrap()
    }

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_new_fills_24_cells() {
        let board = board();
        assert_eq!(board.occupied_count(), OCCUPIED_CELLS);
        assert_eq!(board.cell_state(Position::CENTER), CellState::Empty);
        assert!(board.face_up_cards().is_empty());
        assert_eq!(board.face_down_positions().len(), 24);
    }

    #[test]
    fn test_new_withholds_one_card() {
        let pool = Arc::new(CardPool::standard());
        let mut supply = pool.supply();
        Board::new(pool, &mut supply).unwrap();
        assert_eq!(supply.len(), 1);
    }

    #[test]
    fn test_new_fails_on_short_supply() {
        let pool = Arc::new(CardPool::standard());
        let mut supply = Supply::new(pool.ids().take(20).collect());
        let err = Board::new(pool, &mut supply).unwrap_err();
        assert!(matches!(
            err,
            GameError::SupplyExhausted { needed: 24, available: 20 }
        ));
    }

    #[test]
    fn test_center_is_out_of_range() {
        let mut board = board();
        assert!(matches!(
            board.is_face_up(Position::CENTER),
            Err(GameError::OutOfRange(RangeViolation::Center))
        ));
        assert!(board.is_blocked(Position::CENTER).is_err());
        assert!(board.turn_face_up(Position::CENTER).is_err());
        assert!(board.turn_face_down(Position::CENTER).is_err());
        assert!(board.set_blocked(Position::CENTER, true).is_err());
    }

    #[test]
    fn test_turn_face_up_twice() {
        let mut board = board();
        let p = pos("A1");
        assert!(board.turn_face_up(p).unwrap());
        let snapshot = board.face_up_cards();
        assert!(!board.turn_face_up(p).unwrap());
        assert_eq!(board.face_up_cards(), snapshot);

        assert!(board.turn_face_down(p).unwrap());
        assert!(!board.turn_face_down(p).unwrap());
    }

    #[test]
    fn test_face_up_cards_row_major() {
        let mut board = board();
        board.turn_face_up(pos("D4")).unwrap();
        board.turn_face_up(pos("A5")).unwrap();
        board.turn_face_up(pos("B1")).unwrap();

        let order: Vec<Position> = board.face_up_cards().into_iter().map(|(p, _)| p).collect();
        assert_eq!(order, vec![pos("A5"), pos("B1"), pos("D4")]);
    }

    #[test]
    fn test_has_face_down_cards() {
        let mut board = board();
        for p in Position::all().filter(|p| !p.is_center()) {
            assert!(board.has_face_down_cards());
            board.turn_face_up(p).unwrap();
        }
        assert!(!board.has_face_down_cards());

        board.all_faces_down();
        assert!(board.has_face_down_cards());
    }

    #[test]
    fn test_block_and_clear() {
        let mut board = board();
        board.set_blocked(pos("B2"), true).unwrap();
        assert!(board.is_blocked(pos("B2")).unwrap());
        assert_eq!(board.blocked_position(), Some(pos("B2")));

        board.clear_blocked();
        board.set_blocked(pos("E5"), true).unwrap();
        assert_eq!(board.blocked_position(), Some(pos("E5")));
        assert!(!board.is_blocked(pos("B2")).unwrap());

        board.all_faces_down();
        assert_eq!(board.blocked_position(), None);
    }

    #[test]
    fn test_swap_moves_whole_cell() {
        let mut board = board();
        let a = pos("A1");
        let b = pos("A2");
        let card_a = board.card_id(a).unwrap();
        let card_b = board.card_id(b).unwrap();
        board.turn_face_up(a).unwrap();
        board.set_blocked(b, true).unwrap();

        board.swap_cells(a, b).unwrap();

        assert_eq!(board.card_id(a).unwrap(), card_b);
        assert_eq!(board.card_id(b).unwrap(), card_a);
        assert!(board.is_face_up(b).unwrap());
        assert!(!board.is_face_up(a).unwrap());
        assert!(board.is_blocked(a).unwrap());

        board.swap_cells(a, b).unwrap();
        assert_eq!(board.card_id(a).unwrap(), card_a);
        assert!(board.is_face_up(a).unwrap());
        assert!(board.is_blocked(b).unwrap());
    }

    #[test]
    fn test_swap_with_center_fails() {
        let mut board = board();
        assert!(board.swap_cells(pos("C2"), Position::CENTER).is_err());
    }

    #[test]
    fn test_check_selection() {
        let mut board = board();
        let b2 = Position::new(Row::B, Column::Two);
        assert_eq!(board.check_selection(b2, false), Ok(()));
        assert_eq!(
            board.check_selection(Position::CENTER, false),
            Err(Rejection::Unavailable(Position::CENTER))
        );

        board.set_blocked(b2, true).unwrap();
        assert_eq!(board.check_selection(b2, true), Err(Rejection::Blocked(b2)));
        assert_eq!(board.check_selection(b2, false), Ok(()));

        board.turn_face_up(b2).unwrap();
        assert_eq!(board.check_selection(b2, false), Err(Rejection::AlreadyFaceUp(b2)));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::AlreadyFaceUp(pos("B3")).to_string(),
            "Card B3 is already face up."
        );
        assert_eq!(
            Rejection::Unavailable(Position::CENTER).to_string(),
            "That position cannot be selected."
        );
    }
}
