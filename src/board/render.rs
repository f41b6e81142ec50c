//! Text pictures of the board.
//!
//! Every cell is drawn 3 characters wide and 3 rows tall:
//! - face up: the card picture (`rrr` / `rCr` / `rrr`)
//! - face down: `zzz` on every row
//! - center or empty: blanks
//!
//! [`Board`]'s `Display` draws the full grid with row letters on the left
//! and column numbers underneath. [`FaceUpRow`] draws only the visible
//! cards side by side, labelled by position.

use std::fmt;

use super::grid::{Board, CellState};
use crate::cards::Card;
use crate::core::{Column, Position, Row};

const FACE_DOWN_ROW: &str = "zzz";
const EMPTY_ROW: &str = "   ";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in Row::ALL {
            for inner in 0..Card::ROWS {
                let label = if inner == 1 { row.symbol() } else { ' ' };
                write!(f, "{label} ")?;

                for (i, column) in Column::ALL.into_iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    match self.cell_state(Position::new(row, column)) {
                        CellState::Empty => f.write_str(EMPTY_ROW)?,
                        CellState::FaceDown { .. } => f.write_str(FACE_DOWN_ROW)?,
                        CellState::FaceUp { card, .. } => f.write_str(&card.row(inner))?,
                    }
                }
                writeln!(f)?;
            }
        }

        f.write_str("  ")?;
        for (i, column) in Column::ALL.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, " {} ", column.symbol())?;
        }
        writeln!(f)
    }
}

/// Condensed picture: the face-up cards in a single row.
pub struct FaceUpRow<'a>(pub &'a Board);

impl fmt::Display for FaceUpRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let face_up = self.0.face_up_cards();
        if face_up.is_empty() {
            return writeln!(f, "No cards are currently face up.");
        }

        for inner in 0..Card::ROWS {
            let rows: Vec<String> = face_up.iter().map(|(_, card)| card.row(inner)).collect();
            writeln!(f, "{}", rows.join(" "))?;
        }
        let labels: Vec<String> = face_up.iter().map(|(pos, _)| format!("{:<3}", pos.to_string())).collect();
        writeln!(f, "{}", labels.join(" ").trim_end())
    }
}
