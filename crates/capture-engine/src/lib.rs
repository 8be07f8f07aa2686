//! Capture calculation over a sparse 8x8 board.
//!
//! This crate provides:
//! - [`Board`] - occupancy mapping from squares to piece kinds
//! - [`CaptureQuery`] - one white attacker queried against a populated board
//! - [`QuerySetup`] - placement-contract enforcement for building queries
//!
//! The board is colorless: it records what stands where, and the single
//! white attacker is tracked alongside it. A query is one request/response:
//! the board is populated once and a single capture computation runs against it.
//!
//! # Example
//!
//! ```
//! use capture_core::{PieceKind, Square};
//! use capture_engine::QuerySetup;
//!
//! let e4 = Square::from_algebraic("e4").unwrap();
//! let e6 = Square::from_algebraic("e6").unwrap();
//! let e8 = Square::from_algebraic("e8").unwrap();
//!
//! let mut setup = QuerySetup::new(PieceKind::Rook, e4).unwrap();
//! setup.add_black(PieceKind::Pawn, e6).unwrap();
//! setup.add_black(PieceKind::Queen, e8).unwrap();
//!
//! let query = setup.finish().unwrap();
//! // The pawn on e6 blocks the queen on e8.
//! assert_eq!(query.capturable_squares(), vec![e6]);
//! ```

mod board;
mod query;
mod setup;

pub use board::Board;
pub use query::CaptureQuery;
pub use setup::{QuerySetup, SetupError, MAX_BLACK_PIECES};
