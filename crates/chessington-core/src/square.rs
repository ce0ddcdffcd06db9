//! Board square representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A (row, column) coordinate on the board.
///
/// Row 0 is White's back row and row 7 is Black's; column 0 is the a-file.
/// Coordinates outside `0..=7` are representable so that move generation can
/// step off the edge and filter afterwards, but such squares never hold a
/// piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    /// Number of rows and columns on the board.
    pub const SIZE: i8 = 8;

    /// Creates a square. The result may be off the board.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    /// Returns true if both coordinates are in `0..=7`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < Self::SIZE && self.col >= 0 && self.col < Self::SIZE
    }

    /// Returns the square translated by the given deltas.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Square::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// Returns the 0-63 index of an on-board square, row-major.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some(self.row as usize * 8 + self.col as usize)
        } else {
            None
        }
    }

    /// Iterates the 64 on-board squares, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Square::new(row, col)))
    }

    /// Parses a square from algebraic notation (e.g., "e4").
    pub const fn from_algebraic(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let col = match bytes[0].to_ascii_lowercase() {
            c @ b'a'..=b'h' => (c - b'a') as i8,
            _ => return None,
        };
        let row = match bytes[1] {
            r @ b'1'..=b'8' => (r - b'1') as i8,
            _ => return None,
        };
        Some(Square::new(row, col))
    }

    /// Returns the algebraic notation for an on-board square.
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'1' + self.row as u8) as char;
        Some(format!("{}{}", file, rank))
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_algebraic() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
