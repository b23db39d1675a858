//! Attack detection.
//!
//! A square counts as attacked when some opposing piece can reach it by its
//! movement pattern on the given board. That includes pawn pushes onto an
//! empty square and excludes pawn diagonals onto one, so the answer depends
//! on what currently stands on the square.

use super::{Board, Color, Square};

impl Board {
    /// Whether any piece of `defender`'s opponent can reach `square`.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, defender: Color) -> bool {
        self.attackers_of(square, defender).next().is_some()
    }

    /// Squares of the opposing pieces that reach `square`.
    pub fn attackers_of(
        &self,
        square: Square,
        defender: Color,
    ) -> impl Iterator<Item = Square> + '_ {
        self.squares_of(defender.opponent())
            .filter(move |&from| self.reachable_squares(from).contains(&square))
    }

    /// Whether `color`'s king is attacked. A board without that king is
    /// never in check.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        self.find_king(color)
            .is_some_and(|king_sq| self.is_square_attacked(king_sq, color))
    }
}
