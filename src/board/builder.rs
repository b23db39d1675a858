//! Fluent builder for constructing positions.
//!
//! Sets up custom positions square by square. Handy in tests and for
//! puzzles where writing FEN by hand is error prone.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind};
//!
//! let state = BoardBuilder::new()
//!     .piece("e1".parse().unwrap(), Color::White, PieceKind::King)
//!     .piece("e8".parse().unwrap(), Color::Black, PieceKind::King)
//!     .piece("a2".parse().unwrap(), Color::White, PieceKind::Pawn)
//!     .side_to_move(Color::Black)
//!     .build_state();
//! assert_eq!(state.board.piece_count(), 3);
//! ```

use super::{Board, CastleSide, CastlingRights, Color, Piece, PieceKind, Square};
use crate::game::GameState;

/// Collects pieces, the side to move and castling flags for a new position.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder. No castling is allowed until
    /// granted.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
        }
    }

    /// Start from the standard arrangement with every castle available.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::all(),
        }
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set_piece(square, Piece::new(color, kind));
        self
    }

    /// Empty a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.remove_piece(square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Replace the castling flags wholesale.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Mark the king and h-file rook of `color` as unmoved.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.grant(color, CastleSide::King);
        self
    }

    /// Mark the king and a-file rook of `color` as unmoved.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.grant(color, CastleSide::Queen);
        self
    }

    /// Every king and rook unmoved.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    /// Every king and rook moved.
    #[must_use]
    pub const fn no_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::none();
        self
    }

    /// Build the board alone.
    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }

    /// Build a full game state with side to move and castling rights.
    #[must_use]
    pub fn build_state(self) -> GameState {
        GameState::from_parts(self.board, self.side_to_move, self.castling_rights)
    }
}
