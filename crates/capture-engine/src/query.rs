//! Capture calculation.
//!
//! Two attacker rules are supported: the pawn's diagonal-forward capture and
//! the rook's sliding capture along ranks and files. Any other attacker kind
//! yields no captures. Kings are never reported as capturable, regardless of
//! geometric reachability.

use capture_core::{PieceKind, Square};

use crate::Board;

/// Diagonal-forward offsets for a pawn advancing toward higher ranks.
const PAWN_OFFSETS: [(i8, i8); 2] = [(-1, 1), (1, 1)];

/// The four orthogonal unit directions a rook slides along.
const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// A single capture query: one white attacker against a populated board.
///
/// Bundles the board with the attacker's kind and square. Every occupied
/// square other than the attacker's own is treated as a black piece. The
/// query never mutates the board.
#[derive(Debug, Clone)]
pub struct CaptureQuery {
    board: Board,
    attacker: PieceKind,
    origin: Square,
}

impl CaptureQuery {
    /// Bundles a populated board with the attacker's kind and square.
    ///
    /// No placement contract is enforced here; use
    /// [`QuerySetup`](crate::QuerySetup) when building from raw input.
    pub const fn new(board: Board, attacker: PieceKind, origin: Square) -> Self {
        CaptureQuery {
            board,
            attacker,
            origin,
        }
    }

    /// Returns the board the query runs against.
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the attacker's piece kind.
    pub const fn attacker(&self) -> PieceKind {
        self.attacker
    }

    /// Returns the attacker's square.
    pub const fn origin(&self) -> Square {
        self.origin
    }

    /// Computes the squares the attacker can capture on, in ascending
    /// square order.
    ///
    /// Dispatches on the attacker kind: pawns and rooks have capture rules,
    /// every other kind yields an empty set. Squares occupied by a
    /// king are filtered out afterwards. The attacker's own square never
    /// appears, since both rules only generate squares away from the origin.
    pub fn capturable_squares(&self) -> Vec<Square> {
        let mut targets = match self.attacker {
            PieceKind::Pawn => pawn_captures(&self.board, self.origin),
            PieceKind::Rook => rook_captures(&self.board, self.origin),
            _ => Vec::new(),
        };
        targets.retain(|&square| self.board.piece_at(square) != Some(PieceKind::King));
        targets.sort_unstable();
        targets
    }
}

/// Occupied diagonal-forward neighbors of a pawn on `origin`.
///
/// Forward is fixed as increasing rank. An empty diagonal square is not a
/// capture; off-board candidates fall away in [`Square::offset`].
fn pawn_captures(board: &Board, origin: Square) -> Vec<Square> {
    PAWN_OFFSETS
        .iter()
        .filter_map(|&(file_delta, rank_delta)| origin.offset(file_delta, rank_delta))
        .filter(|&square| board.is_occupied(square))
        .collect()
}

/// First occupied square in each orthogonal direction from `origin`.
///
/// Each walk stops at the board edge (contributing nothing) or at the first
/// piece it meets; squares behind that piece are unreachable.
fn rook_captures(board: &Board, origin: Square) -> Vec<Square> {
    let mut captures = Vec::new();
    for &(file_delta, rank_delta) in &ROOK_DIRECTIONS {
        let mut current = origin;
        while let Some(next) = current.offset(file_delta, rank_delta) {
            if board.is_occupied(next) {
                captures.push(next);
                break;
            }
            current = next;
        }
    }
    captures
}
