use super::error::FenError;
use super::{Board, CastleSide, CastlingRights, Color, Piece, Square};
use crate::game::GameState;

impl Board {
    /// Parse the piece placement field of a FEN string. Any further fields
    /// are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::InvalidRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx as u8;
            let mut file: usize = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::InvalidFileCount {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                board.set_piece(Square::new_unchecked(file as u8, rank), piece);
                file += 1;
            }
            if file != 8 {
                return Err(FenError::InvalidFileCount {
                    rank: rank_idx,
                    files: file,
                });
            }
        }
        Ok(board)
    }

    /// Parse a FEN placement field.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// The piece placement field of FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(Square::new_unchecked(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        rows.join("/")
    }
}

impl GameState {
    /// Parse placement, side to move and castling fields.
    ///
    /// The side to move defaults to white and castling to none when the
    /// fields are missing. Remaining fields (en passant, clocks) are ignored.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let board = Board::try_from_fen(fen)?;
        let mut parts = fen.split_whitespace().skip(1);

        let side_to_move = match parts.next() {
            None | Some("w") => Color::White,
            Some("b") => Color::Black,
            Some(other) => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut rights = CastlingRights::none();
        for c in parts.next().unwrap_or("-").chars() {
            match c {
                'K' => rights.grant(Color::White, CastleSide::King),
                'Q' => rights.grant(Color::White, CastleSide::Queen),
                'k' => rights.grant(Color::Black, CastleSide::King),
                'q' => rights.grant(Color::Black, CastleSide::Queen),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        Ok(GameState::from_parts(board, side_to_move, rights))
    }

    /// Parse a FEN string.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Placement, side to move and castling fields.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        format!(
            "{} {} {}",
            self.board.to_fen(),
            active,
            self.castling_rights.to_fen()
        )
    }
}
