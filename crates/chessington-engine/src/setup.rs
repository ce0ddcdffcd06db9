//! Board setup files.
//!
//! A setup is a TOML document with an optional FEN placement and a list of
//! extra pieces:
//!
//! ```toml
//! placement = "8/8/8/8/8/8/8/8"
//!
//! [[pieces]]
//! square = "e2"
//! piece = "P"
//! ```

use std::path::Path;

use chessington_core::{Piece, Square};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{Board, BoardError};

/// Errors raised while loading or applying a setup.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to read setup file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid setup file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid square '{0}'")]
    InvalidSquare(String),

    #[error("invalid piece '{0}'")]
    InvalidPiece(char),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// A board description loaded from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoardSetup {
    /// FEN placement applied first. An empty board when absent.
    #[serde(default)]
    pub placement: Option<String>,

    /// Pieces placed after the placement, in order.
    #[serde(default)]
    pub pieces: Vec<PieceSetup>,
}

/// One piece in a [`BoardSetup`].
#[derive(Debug, Clone, Deserialize)]
pub struct PieceSetup {
    /// Algebraic square, e.g. "e4".
    pub square: String,

    /// FEN piece letter: uppercase for White, lowercase for Black.
    pub piece: char,
}

impl BoardSetup {
    /// Parses a setup from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SetupError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a setup file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let setup = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), pieces = setup.pieces.len(), "loaded board setup");
        Ok(setup)
    }

    /// Builds the described board.
    pub fn build(&self) -> Result<Board, SetupError> {
        let mut board = match &self.placement {
            Some(placement) => Board::from_placement(placement)?,
            None => Board::empty(),
        };

        for entry in &self.pieces {
            let square = Square::from_algebraic(&entry.square)
                .ok_or_else(|| SetupError::InvalidSquare(entry.square.clone()))?;
            let piece =
                Piece::from_fen_char(entry.piece).ok_or(SetupError::InvalidPiece(entry.piece))?;
            board.set_piece(square, piece)?;
        }

        Ok(board)
    }
}
