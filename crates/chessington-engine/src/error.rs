//! Board error type.

use chessington_core::{FenError, Square};
use thiserror::Error;

use crate::PieceId;

/// Errors raised by board queries and mutations.
///
/// Off-board squares met while generating moves are filtered out and never
/// surface as errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("{0} is not on the board")]
    NotPlaced(PieceId),

    #[error("{0} is already on the board")]
    AlreadyPlaced(PieceId),

    #[error("no piece on {0}")]
    EmptySquare(Square),

    #[error("square {0} is already occupied")]
    Occupied(Square),

    #[error("square {0} is off the board")]
    OffBoard(Square),

    #[error(transparent)]
    InvalidPlacement(#[from] FenError),
}
