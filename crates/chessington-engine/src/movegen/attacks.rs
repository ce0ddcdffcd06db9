//! Destination geometry for leaping and sliding pieces.

use chessington_core::{Player, Square};

use crate::Board;

/// Knight offsets as (row delta, column delta).
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// King offsets: one step in every direction.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Bishop ray directions.
pub const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Rook ray directions.
pub const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Queen ray directions.
pub const ALL_DIRECTIONS: [(i8, i8); 8] = KING_OFFSETS;

/// Returns true if `square` holds a piece belonging to `player`.
#[inline]
fn is_own(board: &Board, square: Square, player: Player) -> bool {
    board
        .piece_at(square)
        .is_some_and(|piece| piece.player == player)
}

/// Returns the fixed-offset destinations from `from`.
///
/// Intervening pieces are ignored. A destination is dropped if it is off
/// the board or holds one of `player`'s own pieces.
pub fn leaper_targets(
    board: &Board,
    from: Square,
    player: Player,
    offsets: &[(i8, i8)],
) -> Vec<Square> {
    offsets
        .iter()
        .map(|&(d_row, d_col)| from.offset(d_row, d_col))
        .filter(|&to| to.is_on_board() && !is_own(board, to, player))
        .collect()
}

/// Returns the squares reachable along each ray from `from`.
///
/// A ray continues over empty squares, includes the first opponent piece it
/// meets and stops there, and stops short of an own piece.
pub fn ray_targets(
    board: &Board,
    from: Square,
    player: Player,
    directions: &[(i8, i8)],
) -> Vec<Square> {
    let mut targets = Vec::new();
    for &(d_row, d_col) in directions {
        let mut to = from.offset(d_row, d_col);
        while to.is_on_board() {
            match board.piece_at(to) {
                None => targets.push(to),
                Some(piece) => {
                    if piece.player != player {
                        targets.push(to);
                    }
                    break;
                }
            }
            to = to.offset(d_row, d_col);
        }
    }
    targets
}
