//! Move type and square sets.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PromotionKind;
use super::square::Square;
use crate::board::error::MoveParseError;

/// Destinations of a piece. Ordered so results are deterministic.
pub type SquareSet = BTreeSet<Square>;

/// A move from one square to another, optionally promoting a pawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PromotionKind>,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_promotion(from: Square, to: Square, promotion: PromotionKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.kind().to_char())?;
        }
        Ok(())
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`.
impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if !(4..=5).contains(&len) {
            return Err(MoveParseError::InvalidLength { len });
        }
        let invalid_square = || MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        if !s.is_ascii() {
            return Err(invalid_square());
        }
        let from: Square = s[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = s[2..4].parse().map_err(|_| invalid_square())?;
        let promotion = match s[4..].chars().next() {
            None => None,
            Some(c) => Some(
                PromotionKind::from_char(c).ok_or(MoveParseError::InvalidPromotion { char: c })?,
            ),
        };
        Ok(Move {
            from,
            to,
            promotion,
        })
    }
}
