//! Error types for board and game operations.

use std::fmt;

use super::status::Outcome;
use super::types::Square;

/// Why a FEN string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// No placement field at all
    Empty,
    /// A placement character that names no piece
    InvalidPiece { char: char },
    /// A castling character other than `KQkq-`
    InvalidCastling { char: char },
    /// Side to move other than `w` or `b`
    InvalidSideToMove { found: String },
    /// Placement does not describe exactly eight ranks
    InvalidRankCount { found: usize },
    /// A rank describes more or fewer than eight files
    InvalidFileCount { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "FEN has no placement field"),
            FenError::InvalidPiece { char } => {
                write!(f, "no piece is written '{char}'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "unexpected '{char}' in castling field")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "side to move is '{found}', not w or b")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "placement has {found} ranks instead of 8")
            }
            FenError::InvalidFileCount { rank, files } => {
                write!(f, "placement rank {rank} spans {files} files instead of 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Why coordinate move text such as `e7e8q` was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Not four or five ASCII characters
    InvalidLength { len: usize },
    /// One of the two squares does not parse
    InvalidSquare { notation: String },
    /// Fifth character is not one of `qrbn`
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "move text has {len} characters, expected 4 or 5")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "bad square in move '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "cannot promote to '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Why a square could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Zero-based rank past 7
    RankOutOfBounds { rank: u8 },
    /// Zero-based file past 7
    FileOutOfBounds { file: u8 },
    /// Text that is not a file letter followed by a rank digit
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "rank index {rank} is off the board")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "file index {file} is off the board")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "'{notation}' is not a square")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for moves rejected by a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The destination is not among the legal moves of the piece on `from`,
    /// or that piece does not belong to the side to move.
    IllegalMove { from: Square, to: Square },
    /// The game already reached a terminal outcome.
    GameOver { outcome: Outcome },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove { from, to } => {
                write!(f, "illegal move {from}{to}")
            }
            MoveError::GameOver { outcome } => {
                write!(f, "game is over: {outcome}")
            }
        }
    }
}

impl std::error::Error for MoveError {}
