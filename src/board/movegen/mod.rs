//! Move generation in two layers.
//!
//! `reachable_squares` follows the movement pattern of a piece and nothing
//! else; it is what attack detection runs on. `pseudo_legal_moves` adds
//! castling, which itself needs attack detection, so the two never recurse
//! into each other. `legal_moves` then drops every candidate that would leave
//! the mover's king attacked.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use sliders::slider_directions;

use super::{Board, CastlingRights, Color, Move, PieceKind, Square, SquareSet};

impl Board {
    /// Squares the piece on `from` could move to by its movement pattern,
    /// ignoring castling and king safety. Empty for an empty square.
    #[must_use]
    pub fn reachable_squares(&self, from: Square) -> SquareSet {
        let mut targets = SquareSet::new();
        let Some(piece) = self.piece_at(from) else {
            return targets;
        };

        match piece.kind {
            PieceKind::Pawn => self.pawn_targets(from, piece.color, &mut targets),
            PieceKind::Knight => {
                self.step_targets(from, piece.color, &knights::KNIGHT_OFFSETS, &mut targets);
            }
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => self.slider_targets(
                from,
                piece.color,
                slider_directions(piece.kind),
                &mut targets,
            ),
            PieceKind::King => self.king_step_targets(from, piece.color, &mut targets),
        }
        targets
    }

    /// Reachable squares plus castling hops for a king.
    #[must_use]
    pub fn pseudo_legal_moves(&self, from: Square, rights: &CastlingRights) -> SquareSet {
        let mut targets = self.reachable_squares(from);
        if let Some(piece) = self.piece_at(from) {
            if piece.kind == PieceKind::King {
                self.castling_targets(from, piece.color, rights, &mut targets);
            }
        }
        targets
    }

    /// Pseudo-legal moves that do not leave the mover's own king attacked.
    ///
    /// Each candidate is tried on a scratch copy of the board (plain
    /// relocation, no rook hop, no promotion); the live board is untouched.
    #[must_use]
    pub fn legal_moves(&self, from: Square, rights: &CastlingRights) -> SquareSet {
        let Some(piece) = self.piece_at(from) else {
            return SquareSet::new();
        };

        self.pseudo_legal_moves(from, rights)
            .into_iter()
            .filter(|&to| !self.with_move(from, to).in_check(piece.color))
            .collect()
    }

    /// Whether `to` is a legal destination for the piece on `from`.
    #[must_use]
    pub fn is_legal_move(&self, from: Square, to: Square, rights: &CastlingRights) -> bool {
        self.legal_moves(from, rights).contains(&to)
    }

    /// Every legal move of `color`, in square order of origin then target.
    ///
    /// Promotions are listed once, without a promotion kind; the executor
    /// picks the kind when the move is played.
    #[must_use]
    pub fn all_legal_moves(&self, color: Color, rights: &CastlingRights) -> Vec<Move> {
        self.squares_of(color)
            .flat_map(|from| {
                self.legal_moves(from, rights)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Whether any piece of `color` has at least one legal move.
    #[must_use]
    pub fn has_legal_move(&self, color: Color, rights: &CastlingRights) -> bool {
        self.squares_of(color)
            .any(|from| !self.legal_moves(from, rights).is_empty())
    }
}
