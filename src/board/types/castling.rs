//! Castling rights bookkeeping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece, PieceKind};
use super::square::Square;

/// Which wing a castling move goes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CastleSide {
    /// Towards the h-file rook.
    King,
    /// Towards the a-file rook.
    Queen,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// The wing a king move castles to, if `from`/`to` is one of the
    /// color's two castling hops.
    #[must_use]
    pub fn from_king_move(color: Color, from: Square, to: Square) -> Option<CastleSide> {
        let home = king_home(color);
        if from != home {
            return None;
        }
        CastleSide::BOTH
            .into_iter()
            .find(|side| to == home.with_file(side.king_target_file()))
    }

    /// File the rook starts on.
    #[inline]
    #[must_use]
    pub const fn rook_home_file(self) -> u8 {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// File the king lands on.
    #[inline]
    #[must_use]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// File the rook lands on, the square the king passes over.
    #[inline]
    #[must_use]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }
}

pub(crate) const KING_HOME_FILE: u8 = 4;

/// Home square of a color's king.
#[inline]
#[must_use]
pub fn king_home(color: Color) -> Square {
    Square::new_unchecked(KING_HOME_FILE, color.back_rank())
}

/// Home square of a color's rook on the given wing.
#[inline]
#[must_use]
pub fn rook_home(color: Color, side: CastleSide) -> Square {
    king_home(color).with_file(side.rook_home_file())
}

/// Movement flags for one color. Each flag only ever goes from `false` to `true`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingFlags {
    pub king_moved: bool,
    pub a_rook_moved: bool,
    pub h_rook_moved: bool,
}

impl CastlingFlags {
    /// Flags with every piece marked as moved.
    pub const MOVED: CastlingFlags = CastlingFlags {
        king_moved: true,
        a_rook_moved: true,
        h_rook_moved: true,
    };

    #[inline]
    #[must_use]
    pub const fn rook_moved(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::King => self.h_rook_moved,
            CastleSide::Queen => self.a_rook_moved,
        }
    }

    /// Whether the flags alone still allow castling on `side`.
    #[inline]
    #[must_use]
    pub const fn allows(&self, side: CastleSide) -> bool {
        !self.king_moved && !self.rook_moved(side)
    }
}

/// Castling rights for both colors.
///
/// Nothing here notices a rook being captured on its home square: its flag
/// stays clear until a rook of either color moves away from that square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights {
    white: CastlingFlags,
    black: CastlingFlags,
}

impl CastlingRights {
    /// Nothing has moved yet; every castle is still possible.
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights {
            white: CastlingFlags {
                king_moved: false,
                a_rook_moved: false,
                h_rook_moved: false,
            },
            black: CastlingFlags {
                king_moved: false,
                a_rook_moved: false,
                h_rook_moved: false,
            },
        }
    }

    /// Every king and rook counts as moved.
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights {
            white: CastlingFlags::MOVED,
            black: CastlingFlags::MOVED,
        }
    }

    #[inline]
    #[must_use]
    pub const fn flags(&self, color: Color) -> &CastlingFlags {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    #[inline]
    fn flags_mut(&mut self, color: Color) -> &mut CastlingFlags {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Check if a specific castle is still allowed by the flags.
    #[inline]
    #[must_use]
    pub const fn has(&self, color: Color, side: CastleSide) -> bool {
        self.flags(color).allows(side)
    }

    /// Restore the right to castle on one wing (used when setting up positions).
    pub fn grant(&mut self, color: Color, side: CastleSide) {
        let flags = self.flags_mut(color);
        flags.king_moved = false;
        match side {
            CastleSide::King => flags.h_rook_moved = false,
            CastleSide::Queen => flags.a_rook_moved = false,
        }
    }

    /// Mark a piece as having left `from`.
    ///
    /// A king sets its flag from any square. A rook leaving any of the four
    /// rook home squares sets the flag of the color that square belongs to,
    /// whichever color the rook itself is.
    pub fn record_departure(&mut self, piece: Piece, from: Square) {
        match piece.kind {
            PieceKind::King => self.flags_mut(piece.color).king_moved = true,
            PieceKind::Rook => {
                for color in Color::BOTH {
                    if from == rook_home(color, CastleSide::Queen) {
                        self.flags_mut(color).a_rook_moved = true;
                    } else if from == rook_home(color, CastleSide::King) {
                        self.flags_mut(color).h_rook_moved = true;
                    }
                }
            }
            _ => {}
        }
    }

    /// FEN castling field (`KQkq`, `-` when empty).
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut out = String::new();
        for color in Color::BOTH {
            for (side, c) in [(CastleSide::King, 'k'), (CastleSide::Queen, 'q')] {
                if self.has(color, side) {
                    out.push(if color == Color::White {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    });
                }
            }
        }
        if out.is_empty() {
            out.push('-');
        }
        out
    }
}
