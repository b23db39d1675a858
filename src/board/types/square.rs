//! Square type and utilities.

use std::fmt;
use std::str::FromStr;

use crate::board::error::SquareError;

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// A square on the board: file a..h and rank 1..8, stored zero-based.
///
/// Squares order by index (a1=0, b1=1, ..., h8=63), so sets of squares
/// iterate rank by rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    // Field order matters for the derived ordering.
    rank: u8,
    file: u8,
}

impl Square {
    /// Create a square from zero-based file and rank, if both are on the board.
    #[must_use]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square { rank, file })
        } else {
            None
        }
    }

    /// Both coordinates must already be below 8.
    #[inline]
    #[must_use]
    pub(crate) const fn new_unchecked(file: u8, rank: u8) -> Self {
        Square { rank, file }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    /// Get the square's index (0-63, a1=0, b1=1, ..., h8=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// All 64 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }

    /// The square `df` files and `dr` ranks away, or `None` past the edge.
    #[inline]
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Square> {
        let file = u8::try_from(self.file as i8 + df).ok()?;
        let rank = u8::try_from(self.rank as i8 + dr).ok()?;
        Square::new(file, rank)
    }

    /// The square on the same rank at another file.
    #[inline]
    #[must_use]
    pub(crate) const fn with_file(self, file: u8) -> Square {
        Square {
            rank: self.rank,
            file,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", FILES[self.file as usize], self.rank + 1)
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (u8, u8)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square { rank, file })
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        let file = match file_char {
            'a'..='h' => file_char as u8 - b'a',
            _ => return Err(invalid()),
        };
        let rank = match rank_char {
            '1'..='8' => rank_char as u8 - b'1',
            _ => return Err(invalid()),
        };

        Ok(Square { rank, file })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Square {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Square {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(sq.file(), 4);
        assert_eq!(sq.rank(), 3);
        assert_eq!(sq.to_string(), "e4");
        assert_eq!("h8".parse::<Square>().unwrap().index(), 63);
    }

    #[test]
    fn test_parse_rejects_off_board() {
        for bad in ["i1", "a0", "a9", "e", "e44", ""] {
            assert!(bad.parse::<Square>().is_err(), "{bad} should not parse");
        }
    }

    #[test]
    fn test_offset_stops_at_edge() {
        let a1: Square = "a1".parse().unwrap();
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(1, 2), Some("b3".parse().unwrap()));
        let h8: Square = "h8".parse().unwrap();
        assert_eq!(h8.offset(1, 1), None);
    }

    #[test]
    fn test_try_from_bounds() {
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::FileOutOfBounds { file: 8 })
        );
        assert_eq!(
            Square::try_from((0, 9)),
            Err(SquareError::RankOutOfBounds { rank: 9 })
        );
        assert_eq!(Square::new(4, 3), Some("e4".parse().unwrap()));
        assert_eq!(Square::new(0, 8), None);
        assert_eq!(Square::all().count(), 64);
    }
}
