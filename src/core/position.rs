//! Board coordinates.
//!
//! ## Position
//!
//! A row letter (`A`-`E`) and a column number (`1`-`5`). Positions are
//! written the way players type them: `"B3"`.
//!
//! The type system keeps rows and columns inside the 5x5 extent. Raw
//! indices coming from outside go through [`Position::from_indices`], which
//! reports anything else as [`RangeViolation::OffGrid`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::RangeViolation;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 5;

/// Board row, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Row {
    A,
    B,
    C,
    D,
    E,
}

impl Row {
    /// All rows in top-to-bottom order.
    pub const ALL: [Row; BOARD_SIZE] = [Row::A, Row::B, Row::C, Row::D, Row::E];

    /// Zero-based row index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row for a zero-based index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Printed label (`A`-`E`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Row::A => 'A',
            Row::B => 'B',
            Row::C => 'C',
            Row::D => 'D',
            Row::E => 'E',
        }
    }

    /// Parse a label, ignoring case.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|row| row.symbol() == c.to_ascii_uppercase())
    }
}

/// Board column, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Column {
    /// All columns in left-to-right order.
    pub const ALL: [Column; BOARD_SIZE] = [
        Column::One,
        Column::Two,
        Column::Three,
        Column::Four,
        Column::Five,
    ];

    /// Zero-based column index.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column for a zero-based index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Printed label (`1`-`5`).
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Column::One => '1',
            Column::Two => '2',
            Column::Three => '3',
            Column::Four => '4',
            Column::Five => '5',
        }
    }

    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.symbol() == c)
    }
}

/// A cell address on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: Row,
    pub column: Column,
}

impl Position {
    /// The permanently empty center cell.
    pub const CENTER: Position = Position::new(Row::C, Column::Three);

    #[must_use]
    pub const fn new(row: Row, column: Column) -> Self {
        Self { row, column }
    }

    /// Build a position from zero-based indices.
    ///
    /// ```
    /// use memoarrr::core::{Column, Position, Row};
    ///
    /// let pos = Position::from_indices(1, 2).unwrap();
    /// assert_eq!(pos, Position::new(Row::B, Column::Three));
    /// assert!(Position::from_indices(5, 0).is_err());
    /// ```
    pub fn from_indices(row: usize, column: usize) -> Result<Self, RangeViolation> {
        match (Row::from_index(row), Column::from_index(column)) {
            (Some(row), Some(column)) => Ok(Self::new(row, column)),
            _ => Err(RangeViolation::OffGrid { row, column }),
        }
    }

    #[must_use]
    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }

    /// Every position in row-major scan order, center included.
    pub fn all() -> impl Iterator<Item = Position> {
        Row::ALL
            .into_iter()
            .flat_map(|row| Column::ALL.into_iter().map(move |column| Position::new(row, column)))
    }

    /// Orthogonal neighbours inside the grid (up, down, left, right).
    ///
    /// Edge and corner cells have fewer than four. The center is not
    /// filtered out here; callers that need card-bearing cells do that.
    #[must_use]
    pub fn orthogonal_neighbours(self) -> SmallVec<[Position; 4]> {
        let row = self.row.index();
        let column = self.column.index();
        let mut out = SmallVec::new();

        if let Some(up) = row.checked_sub(1).and_then(Row::from_index) {
            out.push(Position::new(up, self.column));
        }
        if let Some(down) = Row::from_index(row + 1) {
            out.push(Position::new(down, self.column));
        }
        if let Some(left) = column.checked_sub(1).and_then(Column::from_index) {
            out.push(Position::new(self.row, left));
        }
        if let Some(right) = Column::from_index(column + 1) {
            out.push(Position::new(self.row, right));
        }

        out
    }

    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.orthogonal_neighbours().contains(&other)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row.symbol(), self.column.symbol())
    }
}

/// Input that is not a letter `A`-`E` followed by a number `1`-`5`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid format {input:?}: use a letter A-E followed by a number 1-5")]
pub struct ParsePositionError {
    pub input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError { input: s.to_string() };
        let mut chars = s.trim().chars();

        let row = chars.next().and_then(Row::from_symbol).ok_or_else(err)?;
        let column = chars.next().and_then(Column::from_symbol).ok_or_else(err)?;
        if chars.next().is_some() {
            return Err(err());
        }

        Ok(Position::new(row, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(pos("B3"), Position::new(Row::B, Column::Three));
        assert_eq!(pos("e5"), Position::new(Row::E, Column::Five));
        assert_eq!(pos("  a1 "), Position::new(Row::A, Column::One));
        assert_eq!(format!("{}", pos("d2")), "D2");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "B", "F1", "A6", "A0", "3B", "B33", "BB"] {
            assert!(bad.parse::<Position>().is_err(), "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_from_indices() {
        assert_eq!(Position::from_indices(2, 2).unwrap(), Position::CENTER);
        assert_eq!(
            Position::from_indices(0, 5),
            Err(RangeViolation::OffGrid { row: 0, column: 5 })
        );
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Position::all().collect();
        assert_eq!(all.len(), 25);
        assert_eq!(all[0], pos("A1"));
        assert_eq!(all[1], pos("A2"));
        assert_eq!(all[5], pos("B1"));
        assert_eq!(all[24], pos("E5"));
    }

    #[test]
    fn test_neighbours() {
        let corner = pos("A1").orthogonal_neighbours();
        assert_eq!(corner.as_slice(), &[pos("B1"), pos("A2")]);

        let edge = pos("A3").orthogonal_neighbours();
        assert_eq!(edge.len(), 3);

        let inner = pos("B2").orthogonal_neighbours();
        assert_eq!(inner.as_slice(), &[pos("A2"), pos("C2"), pos("B1"), pos("B3")]);

        assert!(pos("C2").is_adjacent(Position::CENTER));
        assert!(!pos("B2").is_adjacent(pos("C3")));
    }
}
