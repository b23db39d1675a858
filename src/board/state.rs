use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (file, kind) in (0u8..).zip(BACK_RANK) {
        for color in Color::BOTH {
            let back = Square::new_unchecked(file, color.back_rank());
            let pawn = Square::new_unchecked(file, color.pawn_start_rank());
            board.set_piece(back, Piece::new(color, kind));
            board.set_piece(pawn, Piece::new(color, PieceKind::Pawn));
        }
    }
    board
});

/// Sparse mapping from squares to pieces. A missing key is an empty square.
///
/// Analysis methods take `&self` and never mutate, so a `Board` can be
/// cloned freely to try a move out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Board {
    pieces: BTreeMap<Square, Piece>,
}

impl Board {
    /// The standard initial arrangement.
    #[must_use]
    pub fn new() -> Self {
        STARTING_BOARD.clone()
    }

    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            pieces: BTreeMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.pieces.get(&square).copied()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        !self.pieces.contains_key(&square)
    }

    /// Whether `square` holds a piece of the color opposing `color`.
    #[inline]
    #[must_use]
    pub fn is_enemy(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|p| p.color != color)
    }

    /// Put a piece on a square, returning whatever stood there.
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.pieces.insert(square, piece)
    }

    /// Empty a square, returning whatever stood there.
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.pieces.remove(&square)
    }

    /// Move whatever stands on `from` to `to`, capturing anything on `to`.
    /// No castling or promotion side effects. Returns the captured piece.
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        match self.pieces.remove(&from) {
            Some(piece) => self.pieces.insert(to, piece),
            None => None,
        }
    }

    /// Copy of the board with one piece moved; the scratch board used to
    /// test a candidate move.
    #[must_use]
    pub fn with_move(&self, from: Square, to: Square) -> Board {
        let mut scratch = self.clone();
        let _ = scratch.relocate(from, to);
        scratch
    }

    /// Occupied squares and their pieces, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces.iter().map(|(&sq, &piece)| (sq, piece))
    }

    /// Squares holding pieces of `color`, in square order.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.color == color)
            .map(|(sq, _)| sq)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Square of `color`'s king. `None` only on boards that break the
    /// one-king-per-color assumption.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|&(_, piece)| piece == king)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// Text diagram, rank 8 at the top, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let sq = Square::new_unchecked(file, rank);
                let c = self.piece_at(sq).map_or('.', Piece::to_fen_char);
                write!(f, "{c}")?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
