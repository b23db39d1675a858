//! Core chess types.
//!
//! This module contains the value types shared by every layer of the rules:
//! - `Piece`, `PieceKind`, `PromotionKind` and `Color`
//! - `Square` - a file/rank pair that is always on the board
//! - `Move` and `SquareSet` - move representation
//! - `CastlingRights` - per-color king and rook movement flags

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::{king_home, rook_home, CastleSide, CastlingFlags, CastlingRights};
pub use moves::{Move, SquareSet};
pub use piece::{Color, Piece, PieceKind, PromotionKind};
pub use square::Square;
