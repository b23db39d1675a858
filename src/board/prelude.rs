//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = Game::new();
//! assert_eq!(game.state().side_to_move, Color::White);
//! ```

pub use super::{
    Board, BoardBuilder, CastlingRights, Color, Move, MoveError, Outcome, Piece, PieceKind,
    PromotionKind, Square, SquareSet,
};
pub use crate::game::{Game, GameState};
