//! Move generation.
//!
//! Each piece kind computes its destinations from its current square and a
//! read-only view of the board. Generation never mutates the board; only
//! [`move_to`] does, by delegating to [`Board::move_piece`].
//!
//! Moves are pseudo-legal: check, castling, en passant and promotion are not
//! considered.

mod attacks;

use chessington_core::{PieceKind, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug_span, trace};

use crate::{Board, BoardError, PieceId};

pub use attacks::{
    leaper_targets, ray_targets, ALL_DIRECTIONS, DIAGONALS, KING_OFFSETS, KNIGHT_OFFSETS,
    ORTHOGONALS,
};

/// A destination available to a specific piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceMove {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
}

/// Returns every square the piece may move to.
///
/// The result is deterministic for a given board and contains only on-board
/// squares. Fails with [`BoardError::NotPlaced`] if the piece is not on the
/// board.
pub fn available_moves(board: &Board, id: PieceId) -> Result<Vec<Square>, BoardError> {
    let from = board.find_piece(id)?;
    let piece = board.piece(id).ok_or(BoardError::NotPlaced(id))?;

    let moves = match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece.player),
        PieceKind::Knight => leaper_targets(board, from, piece.player, &KNIGHT_OFFSETS),
        PieceKind::Bishop => ray_targets(board, from, piece.player, &DIAGONALS),
        PieceKind::Rook => ray_targets(board, from, piece.player, &ORTHOGONALS),
        PieceKind::Queen => ray_targets(board, from, piece.player, &ALL_DIRECTIONS),
        PieceKind::King => leaper_targets(board, from, piece.player, &KING_OFFSETS),
    };

    trace!(piece = %id, kind = %piece.kind, %from, count = moves.len(), "generated moves");
    Ok(moves)
}

/// Moves the piece to `destination`.
///
/// The destination is not checked against [`available_moves`]; callers pass
/// a square they have already validated. Returns the captured piece, if any.
pub fn move_to(
    board: &mut Board,
    id: PieceId,
    destination: Square,
) -> Result<Option<PieceId>, BoardError> {
    let _span = debug_span!("move_to", piece = %id, %destination).entered();
    let current = board.find_piece(id)?;
    board.move_piece(current, destination)
}

/// Returns the available moves of every placed piece belonging to `player`.
///
/// Pieces are visited row by row from row 0. This is a query over the board
/// and implies nothing about whose turn it is.
pub fn generate_moves(board: &Board, player: Player) -> Vec<PieceMove> {
    let mut moves = Vec::new();
    for (piece, from) in board.pieces(player) {
        // Pieces yielded by the board are placed, so generation cannot fail.
        let Ok(targets) = available_moves(board, piece) else {
            continue;
        };
        moves.extend(targets.into_iter().map(|to| PieceMove { piece, from, to }));
    }
    moves
}

/// Pawn pushes and diagonal captures.
///
/// A push moves one row in the player's direction, or two from the starting
/// row. Every square on the path, destination included, must be empty: a
/// pawn cannot capture straight ahead or jump. A capture moves one row
/// forward and one column sideways onto an opponent piece.
fn pawn_moves(board: &Board, from: Square, player: Player) -> Vec<Square> {
    let direction = player.pawn_direction();
    let steps: &[i8] = if from.row == player.pawn_start_row() {
        &[1, 2]
    } else {
        &[1]
    };

    let mut moves = Vec::with_capacity(4);
    for &step in steps {
        let to = from.offset(step * direction, 0);
        if !to.is_on_board() {
            continue;
        }
        let blocked = (1..=step).any(|i| board.is_occupied(from.offset(i * direction, 0)));
        if !blocked {
            moves.push(to);
        }
    }

    for d_col in [-1, 1] {
        let to = from.offset(direction, d_col);
        if board
            .piece_at(to)
            .is_some_and(|target| target.player != player)
        {
            moves.push(to);
        }
    }

    moves
}
