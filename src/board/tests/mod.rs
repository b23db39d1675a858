//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Piece movement patterns and the legality filter
//! - `castling.rs` - Castling availability and rook relocation
//! - `draw.rs` - Stalemate and insufficient material
//! - `edge_cases.rs` - Checkmates, promotions and executor behaviour
//! - `proptest.rs` - Property-based tests

mod draw;
mod edge_cases;
mod proptest;

use crate::board::{Square, SquareSet};

pub(super) fn sq(s: &str) -> Square {
    s.parse().expect("valid square")
}

pub(super) fn squares(list: &[&str]) -> SquareSet {
    list.iter().map(|s| sq(s)).collect()
}
