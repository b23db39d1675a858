//! Board representation and the rules that run on it.
//!
//! A `Board` is a sparse square-to-piece map. Everything that analyses a
//! position (move generation, attack detection, legality, end-of-game
//! checks) borrows a board immutably, so any snapshot can be inspected
//! without touching the live game.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, CastlingRights};
//!
//! let board = Board::new();
//! let e2 = "e2".parse().unwrap();
//! let moves = board.legal_moves(e2, &CastlingRights::all());
//! assert_eq!(moves.len(), 2);
//! ```

mod attacks;
mod builder;
mod error;
mod fen;
mod movegen;
pub mod prelude;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use state::Board;
pub use status::Outcome;
pub use types::{
    king_home, rook_home, CastleSide, CastlingFlags, CastlingRights, Color, Move, Piece,
    PieceKind, PromotionKind, Square, SquareSet,
};
