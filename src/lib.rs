pub mod board;
pub mod game;
pub mod sync;

pub use board::{Board, CastlingRights, Color, Move, Outcome, Piece, PieceKind, Square};
pub use game::{Game, GameState};
pub use sync::SharedGame;
