//! Core types for Chessington.
//!
//! This crate provides the value types shared by the board and the move
//! generator:
//! - [`Player`] for the side owning a piece
//! - [`PieceKind`] and [`Piece`] for piece representation
//! - [`Square`] for (row, column) board coordinates
//! - FEN placement parsing and serialization

mod fen;
mod piece;
mod player;
mod square;

pub use fen::{parse_placement, to_placement, FenError, STARTING_PLACEMENT};
pub use piece::{Piece, PieceKind};
pub use player::Player;
pub use square::Square;
