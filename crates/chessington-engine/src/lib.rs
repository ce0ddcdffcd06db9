//! Board and per-piece move generation for Chessington.
//!
//! This crate provides:
//! - [`Board`] - piece storage with identity-based lookup via [`PieceId`]
//! - [`available_moves`] and [`move_to`] - the per-piece move contract
//! - [`generate_moves`] - every available move for one side
//! - [`BoardSetup`] - boards described in TOML
//!
//! # Example
//!
//! ```
//! use chessington_core::{Piece, Player, Square};
//! use chessington_engine::{available_moves, move_to, Board};
//!
//! let mut board = Board::empty();
//! let pawn = board.set_piece(Square::new(1, 4), Piece::pawn(Player::White)).unwrap();
//!
//! let moves = available_moves(&board, pawn).unwrap();
//! assert_eq!(moves, vec![Square::new(2, 4), Square::new(3, 4)]);
//!
//! move_to(&mut board, pawn, moves[1]).unwrap();
//! assert_eq!(board.find_piece(pawn), Ok(Square::new(3, 4)));
//! ```

mod board;
mod error;
pub mod movegen;
pub mod setup;

pub use board::{Board, PieceId};
pub use error::BoardError;
pub use movegen::{available_moves, generate_moves, move_to, PieceMove};
pub use setup::{BoardSetup, PieceSetup, SetupError};
