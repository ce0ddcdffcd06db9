//! Player (side) representation.

use serde::{Deserialize, Serialize};

/// The side that owns a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    White = 0,
    Black = 1,
}

impl Player {
    /// Both players, White first.
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    /// Returns the other side.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Returns the row delta of a pawn step (+1 for White, -1 for Black).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Returns the row pawns start on (1 for White, 6 for Black).
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }

    /// Returns the back row (0 for White, 7 for Black).
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent() {
        assert_eq!(Player::White.opponent(), Player::Black);
        assert_eq!(Player::Black.opponent(), Player::White);
    }

    #[test]
    fn pawn_direction() {
        assert_eq!(Player::White.pawn_direction(), 1);
        assert_eq!(Player::Black.pawn_direction(), -1);
    }

    #[test]
    fn start_and_back_rows() {
        assert_eq!(Player::White.pawn_start_row(), 1);
        assert_eq!(Player::Black.pawn_start_row(), 6);
        assert_eq!(Player::White.back_row(), 0);
        assert_eq!(Player::Black.back_row(), 7);
    }

    #[test]
    fn start_row_is_one_step_from_back_row() {
        for player in Player::ALL {
            assert_eq!(
                player.back_row() + player.pawn_direction(),
                player.pawn_start_row()
            );
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Player::White), "White");
        assert_eq!(format!("{}", Player::Black), "Black");
    }
}
