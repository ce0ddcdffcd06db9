//! Board storage and piece placement.

use std::fmt;

use chessington_core::{parse_placement, to_placement, Piece, Player, Square, STARTING_PLACEMENT};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::BoardError;

/// Stable handle for one piece registered with a [`Board`].
///
/// Pieces are plain values, so two white pawns compare equal. The handle is
/// what tells them apart: reverse lookup (piece to square) goes by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(u32);

impl PieceId {
    /// Returns the arena index of this piece.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "piece #{}", self.0)
    }
}

/// An 8x8 board holding registered pieces.
///
/// The board owns every piece it has been given. A piece is either placed on
/// exactly one square or unplaced (never placed, lifted off, or captured).
/// The square-to-piece map and the piece-to-square map always agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Piece values, indexed by [`PieceId`].
    pieces: Vec<Piece>,

    /// Current square of each piece, indexed by [`PieceId`].
    locations: Vec<Option<Square>>,

    /// Occupant of each square, row-major.
    squares: [Option<PieceId>; 64],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Board {
            pieces: Vec::new(),
            locations: Vec::new(),
            squares: [None; 64],
        }
    }

    /// Creates a board with the standard starting arrangement.
    pub fn starting() -> Self {
        Self::from_placement(STARTING_PLACEMENT).expect("starting placement is valid")
    }

    /// Creates a board from the placement field of a FEN string.
    pub fn from_placement(fen: &str) -> Result<Self, BoardError> {
        let mut board = Board::empty();
        for (square, piece) in parse_placement(fen)? {
            board.set_piece(square, piece)?;
        }
        Ok(board)
    }

    /// Registers a piece without placing it.
    pub fn add_piece(&mut self, piece: Piece) -> PieceId {
        let id = PieceId(self.pieces.len() as u32);
        self.pieces.push(piece);
        self.locations.push(None);
        id
    }

    /// Places an unplaced piece on an empty square.
    pub fn place(&mut self, id: PieceId, square: Square) -> Result<(), BoardError> {
        let location = self
            .locations
            .get(id.index())
            .ok_or(BoardError::NotPlaced(id))?;
        if location.is_some() {
            return Err(BoardError::AlreadyPlaced(id));
        }
        let slot = square.index().ok_or(BoardError::OffBoard(square))?;
        if self.squares[slot].is_some() {
            return Err(BoardError::Occupied(square));
        }

        self.squares[slot] = Some(id);
        self.locations[id.index()] = Some(square);
        debug!(piece = %id, %square, "placed piece");
        Ok(())
    }

    /// Registers a piece and places it on an empty square.
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> Result<PieceId, BoardError> {
        if !square.is_on_board() {
            return Err(BoardError::OffBoard(square));
        }
        if self.is_occupied(square) {
            return Err(BoardError::Occupied(square));
        }
        let id = self.add_piece(piece);
        self.place(id, square)?;
        Ok(id)
    }

    /// Lifts the occupant off a square. It stays registered, unplaced.
    pub fn remove(&mut self, square: Square) -> Option<PieceId> {
        let slot = square.index()?;
        let id = self.squares[slot].take()?;
        self.locations[id.index()] = None;
        debug!(piece = %id, %square, "removed piece");
        Some(id)
    }

    /// Returns the id of the piece on a square.
    ///
    /// Off-board squares are never occupied.
    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<PieceId> {
        self.squares[square.index()?]
    }

    /// Returns the value of the piece on a square.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.get_piece(square).and_then(|id| self.piece(id))
    }

    /// Returns the value of a registered piece, placed or not.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.pieces.get(id.index()).copied()
    }

    /// Returns true if a piece stands on the square.
    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.get_piece(square).is_some()
    }

    /// Returns the square a piece stands on.
    pub fn find_piece(&self, id: PieceId) -> Result<Square, BoardError> {
        self.locations
            .get(id.index())
            .copied()
            .flatten()
            .ok_or(BoardError::NotPlaced(id))
    }

    /// Iterates the placed pieces of a player, row 0 first.
    pub fn pieces(&self, player: Player) -> impl Iterator<Item = (PieceId, Square)> + '_ {
        Square::all().filter_map(move |square| {
            let id = self.get_piece(square)?;
            let piece = self.piece(id)?;
            (piece.player == player).then_some((id, square))
        })
    }

    /// Returns the number of pieces currently on the board.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|slot| slot.is_some()).count()
    }

    /// Moves the occupant of `from` to `to`.
    ///
    /// Whatever stood on `to` is captured: it stays registered but becomes
    /// unplaced, and its id is returned. Moving a piece onto its own square
    /// leaves the board unchanged.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<PieceId>, BoardError> {
        let to_slot = to.index().ok_or(BoardError::OffBoard(to))?;
        let mover = self.get_piece(from).ok_or(BoardError::EmptySquare(from))?;
        if from == to {
            return Ok(None);
        }

        let captured = self.squares[to_slot].take();
        if let Some(captured) = captured {
            self.locations[captured.index()] = None;
        }
        // `from` is on the board since it held `mover`.
        if let Some(from_slot) = from.index() {
            self.squares[from_slot] = None;
        }
        self.squares[to_slot] = Some(mover);
        self.locations[mover.index()] = Some(to);

        match captured {
            Some(captured) => debug!(piece = %mover, %from, %to, %captured, "moved piece"),
            None => debug!(piece = %mover, %from, %to, "moved piece"),
        }
        Ok(captured)
    }

    /// Returns the placement field of a FEN string for this board.
    pub fn to_placement(&self) -> String {
        to_placement(|square| self.piece_at(square))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..Square::SIZE).rev() {
            write!(f, "{} ", row + 1)?;
            for col in 0..Square::SIZE {
                let c = self
                    .piece_at(Square::new(row, col))
                    .map_or('.', |piece| piece.to_fen_char());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chessington_core::{FenError, PieceKind};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn empty_board() {
        let board = Board::empty();
        assert_eq!(board.occupied_count(), 0);
        assert_eq!(board.to_placement(), "8/8/8/8/8/8/8/8");
        assert_eq!(Board::default(), board);
    }

    #[test]
    fn starting_board() {
        let board = Board::starting();
        assert_eq!(board.occupied_count(), 32);
        assert_eq!(board.to_placement(), STARTING_PLACEMENT);
        assert_eq!(board.piece_at(sq("e1")), Some(Piece::king(Player::White)));
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::queen(Player::Black)));
        assert_eq!(board.piece_at(sq("e4")), None);
        assert_eq!(board.pieces(Player::White).count(), 16);
        assert_eq!(board.pieces(Player::Black).count(), 16);
    }

    #[test]
    fn from_placement_rejects_bad_fen() {
        assert_eq!(
            Board::from_placement("8/8/8"),
            Err(BoardError::InvalidPlacement(FenError::InvalidRowCount(3)))
        );
    }

    #[test]
    fn set_and_find_piece() {
        let mut board = Board::empty();
        let id = board.set_piece(sq("c2"), Piece::pawn(Player::White)).unwrap();
        assert_eq!(board.find_piece(id), Ok(sq("c2")));
        assert_eq!(board.get_piece(sq("c2")), Some(id));
        assert!(board.is_occupied(sq("c2")));
    }

    #[test]
    fn identical_pieces_have_distinct_ids() {
        let mut board = Board::empty();
        let a = board.set_piece(sq("a2"), Piece::pawn(Player::White)).unwrap();
        let b = board.set_piece(sq("b2"), Piece::pawn(Player::White)).unwrap();
        assert_ne!(a, b);
        assert_eq!(board.piece(a), board.piece(b));
        assert_eq!(board.find_piece(a), Ok(sq("a2")));
        assert_eq!(board.find_piece(b), Ok(sq("b2")));
    }

    #[test]
    fn unplaced_piece_is_not_found() {
        let mut board = Board::empty();
        let id = board.add_piece(Piece::rook(Player::Black));
        assert_eq!(board.find_piece(id), Err(BoardError::NotPlaced(id)));
        assert_eq!(board.piece(id).map(|p| p.kind), Some(PieceKind::Rook));
    }

    #[test]
    fn place_errors() {
        let mut board = Board::empty();
        let first = board.set_piece(sq("d4"), Piece::knight(Player::White)).unwrap();
        let second = board.add_piece(Piece::knight(Player::Black));

        assert_eq!(board.place(second, sq("d4")), Err(BoardError::Occupied(sq("d4"))));
        assert_eq!(
            board.place(second, Square::new(8, 0)),
            Err(BoardError::OffBoard(Square::new(8, 0)))
        );
        assert_eq!(board.place(first, sq("e4")), Err(BoardError::AlreadyPlaced(first)));
        assert_eq!(
            board.set_piece(Square::new(-1, 0), Piece::king(Player::White)),
            Err(BoardError::OffBoard(Square::new(-1, 0)))
        );
    }

    #[test]
    fn remove_unplaces_piece() {
        let mut board = Board::empty();
        let id = board.set_piece(sq("h8"), Piece::king(Player::Black)).unwrap();
        assert_eq!(board.remove(sq("h8")), Some(id));
        assert_eq!(board.find_piece(id), Err(BoardError::NotPlaced(id)));
        assert_eq!(board.remove(sq("h8")), None);

        board.place(id, sq("g7")).unwrap();
        assert_eq!(board.find_piece(id), Ok(sq("g7")));
    }

    #[test]
    fn off_board_queries_are_empty() {
        let board = Board::starting();
        assert_eq!(board.get_piece(Square::new(-1, 4)), None);
        assert_eq!(board.piece_at(Square::new(8, 4)), None);
        assert!(!board.is_occupied(Square::new(0, 8)));
    }

    #[test]
    fn move_piece_relocates() {
        let mut board = Board::empty();
        let id = board.set_piece(sq("e2"), Piece::pawn(Player::White)).unwrap();
        assert_eq!(board.move_piece(sq("e2"), sq("e4")), Ok(None));
        assert_eq!(board.find_piece(id), Ok(sq("e4")));
        assert_eq!(board.get_piece(sq("e2")), None);
        assert_eq!(board.get_piece(sq("e4")), Some(id));
    }

    #[test]
    fn move_piece_captures() {
        let mut board = Board::empty();
        let rook = board.set_piece(sq("a1"), Piece::rook(Player::White)).unwrap();
        let knight = board.set_piece(sq("a8"), Piece::knight(Player::Black)).unwrap();

        assert_eq!(board.move_piece(sq("a1"), sq("a8")), Ok(Some(knight)));
        assert_eq!(board.find_piece(rook), Ok(sq("a8")));
        assert_eq!(board.find_piece(knight), Err(BoardError::NotPlaced(knight)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn move_piece_errors() {
        let mut board = Board::empty();
        board.set_piece(sq("b1"), Piece::knight(Player::White)).unwrap();
        assert_eq!(
            board.move_piece(sq("c3"), sq("d5")),
            Err(BoardError::EmptySquare(sq("c3")))
        );
        assert_eq!(
            board.move_piece(sq("b1"), Square::new(-1, 2)),
            Err(BoardError::OffBoard(Square::new(-1, 2)))
        );
        assert_eq!(board.piece_at(sq("b1")), Some(Piece::knight(Player::White)));
    }

    #[test]
    fn move_piece_onto_itself_is_noop() {
        let mut board = Board::empty();
        let id = board.set_piece(sq("f3"), Piece::bishop(Player::Black)).unwrap();
        assert_eq!(board.move_piece(sq("f3"), sq("f3")), Ok(None));
        assert_eq!(board.find_piece(id), Ok(sq("f3")));
    }

    #[test]
    fn display_diagram() {
        let board = Board::from_placement("8/8/8/8/4P3/8/8/k7").unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  . . . . . . . .");
        assert_eq!(lines[4], "4  . . . . P . . .");
        assert_eq!(lines[7], "1  k . . . . . . .");
        assert_eq!(lines[8], "   a b c d e f g h");
    }
}
