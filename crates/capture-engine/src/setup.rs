//! Placement-contract enforcement for building capture queries.

use capture_core::{PieceKind, Square};
use thiserror::Error;

use crate::{Board, CaptureQuery};

/// Upper bound on black pieces in a single query.
pub const MAX_BLACK_PIECES: usize = 16;

/// Errors raised while assembling a capture query.
///
/// Every variant is an expected outcome of interactive input; callers
/// re-prompt rather than abort.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// Only pawns and rooks are supported as the white attacker.
    #[error("white piece must be a pawn or a rook, got {0}")]
    UnsupportedAttacker(PieceKind),

    /// The square already holds a piece.
    #[error("square {0} is already occupied")]
    SquareOccupied(Square),

    /// The board already holds the maximum number of black pieces.
    #[error("at most 16 black pieces may be placed")]
    TooManyBlackPieces,

    /// A query needs at least one black piece.
    #[error("at least one black piece must be placed")]
    NoBlackPieces,
}

/// Incrementally builds a [`CaptureQuery`], enforcing the placement
/// contract: the attacker is a pawn or rook, no two pieces share a square,
/// and between one and sixteen black pieces join the board.
///
/// The low-level [`Board::place`] checks occupancy only; this type layers
/// the remaining rules on top of it for callers working from raw input.
#[derive(Debug, Clone)]
pub struct QuerySetup {
    board: Board,
    attacker: PieceKind,
    origin: Square,
}

impl QuerySetup {
    /// Starts a setup by placing the white attacker on an empty board.
    pub fn new(attacker: PieceKind, origin: Square) -> Result<Self, SetupError> {
        if !matches!(attacker, PieceKind::Pawn | PieceKind::Rook) {
            return Err(SetupError::UnsupportedAttacker(attacker));
        }
        let mut board = Board::new();
        board.place(attacker, origin);
        Ok(QuerySetup {
            board,
            attacker,
            origin,
        })
    }

    /// Adds one black piece. Any piece kind is allowed, but the square must
    /// be free (the white attacker's square included) and the 16-piece cap
    /// must not be exceeded.
    pub fn add_black(&mut self, kind: PieceKind, square: Square) -> Result<(), SetupError> {
        if self.black_count() >= MAX_BLACK_PIECES {
            return Err(SetupError::TooManyBlackPieces);
        }
        if !self.board.place(kind, square) {
            return Err(SetupError::SquareOccupied(square));
        }
        Ok(())
    }

    /// Returns the number of black pieces placed so far.
    pub fn black_count(&self) -> usize {
        self.board.len() - 1
    }

    /// Finishes the setup, yielding the immutable query.
    pub fn finish(self) -> Result<CaptureQuery, SetupError> {
        if self.black_count() == 0 {
            return Err(SetupError::NoBlackPieces);
        }
        Ok(CaptureQuery::new(self.board, self.attacker, self.origin))
    }
}
