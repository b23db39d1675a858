//! End-of-game evaluation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Board, CastlingRights, Color, PieceKind};

/// Classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// Nothing notable; play continues.
    Ongoing,
    /// The side to move is in check but has a way out.
    Check { side: Color },
    /// The side to move is in check with no legal move.
    Checkmate { winner: Color },
    /// The side to move is not in check and has no legal move.
    Stalemate,
    /// Neither side can possibly mate.
    InsufficientMaterial,
}

impl Outcome {
    /// Whether play stops at this outcome.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Outcome::Checkmate { .. } | Outcome::Stalemate | Outcome::InsufficientMaterial
        )
    }

    /// Whether the game ended without a winner.
    #[inline]
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, Outcome::Stalemate | Outcome::InsufficientMaterial)
    }

    /// The winning color, for a checkmate.
    #[inline]
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Game in progress"),
            Outcome::Check { side } => write!(f, "Check! {side} is in check"),
            Outcome::Checkmate { winner } => write!(f, "Checkmate! {winner} wins!"),
            Outcome::Stalemate => write!(f, "Stalemate! It's a draw."),
            Outcome::InsufficientMaterial => write!(f, "Draw due to insufficient material."),
        }
    }
}

impl Board {
    /// In check, and no piece of `color` has a legal move.
    #[must_use]
    pub fn is_checkmate(&self, color: Color, rights: &CastlingRights) -> bool {
        self.in_check(color) && !self.has_legal_move(color, rights)
    }

    /// Not in check, and no piece of `color` has a legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: Color, rights: &CastlingRights) -> bool {
        !self.in_check(color) && !self.has_legal_move(color, rights)
    }

    /// Only kings remain, or three pieces remain of which exactly one is a
    /// knight or bishop. Two minor pieces, or any pawn, rook or queen, is
    /// enough to keep playing.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        let kinds: Vec<PieceKind> = self.pieces().map(|(_, piece)| piece.kind).collect();
        if kinds.iter().all(|&kind| kind == PieceKind::King) {
            return true;
        }
        let minors = kinds.iter().filter(|kind| kind.is_minor()).count();
        kinds.len() == 3 && minors == 1
    }

    /// Classify the position for `side_to_move`: checkmate, then stalemate,
    /// then insufficient material, then check. The first that holds wins.
    #[must_use]
    pub fn status(&self, side_to_move: Color, rights: &CastlingRights) -> Outcome {
        let in_check = self.in_check(side_to_move);
        let can_move = self.has_legal_move(side_to_move, rights);

        if in_check && !can_move {
            Outcome::Checkmate {
                winner: side_to_move.opponent(),
            }
        } else if !in_check && !can_move {
            Outcome::Stalemate
        } else if self.is_insufficient_material() {
            Outcome::InsufficientMaterial
        } else if in_check {
            Outcome::Check { side: side_to_move }
        } else {
            Outcome::Ongoing
        }
    }
}
