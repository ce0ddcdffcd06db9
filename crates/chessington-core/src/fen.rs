//! FEN piece-placement parsing and serialization.
//!
//! Only the first FEN field is understood. Side to move, castling rights and
//! clocks have no meaning for single-piece move generation, so a full FEN
//! string is accepted and everything after the placement field is ignored.

use thiserror::Error;

use crate::{Piece, Square};

/// Errors that can occur when parsing a placement string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid placement: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid character '{character}' in row {row}")]
    InvalidCharacter { character: char, row: i8 },

    #[error("row {row} has {squares} squares, expected 8")]
    InvalidRowLength { row: i8, squares: u32 },
}

/// Placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Parses the placement field of a FEN string into occupied squares.
///
/// Rows are listed from row 7 down to row 0. Pieces are returned in the
/// order they appear in the string.
pub fn parse_placement(fen: &str) -> Result<Vec<(Square, Piece)>, FenError> {
    let placement = fen.split_whitespace().next().unwrap_or("");
    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(FenError::InvalidRowCount(rows.len()));
    }

    let mut pieces = Vec::new();
    for (i, row_str) in rows.iter().enumerate() {
        let row = 7 - i as i8;
        let mut squares = 0u32;
        for c in row_str.chars() {
            if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                squares += run;
            } else if let Some(piece) = Piece::from_fen_char(c) {
                if squares < 8 {
                    pieces.push((Square::new(row, squares as i8), piece));
                }
                squares += 1;
            } else {
                return Err(FenError::InvalidCharacter { character: c, row });
            }
        }
        if squares != 8 {
            return Err(FenError::InvalidRowLength { row, squares });
        }
    }

    Ok(pieces)
}

/// Serializes occupancy back into a placement field.
///
/// `piece_at` is queried for every on-board square, row 7 first.
pub fn to_placement<F>(mut piece_at: F) -> String
where
    F: FnMut(Square) -> Option<Piece>,
{
    let mut fen = String::new();
    for row in (0..8).rev() {
        let mut empty_count = 0;
        for col in 0..8 {
            if let Some(piece) = piece_at(Square::new(row, col)) {
                if empty_count > 0 {
                    fen.push_str(&empty_count.to_string());
                    empty_count = 0;
                }
                fen.push(piece.to_fen_char());
            } else {
                empty_count += 1;
            }
        }
        if empty_count > 0 {
            fen.push_str(&empty_count.to_string());
        }
        if row > 0 {
            fen.push('/');
        }
    }
    fen
}
