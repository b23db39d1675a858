use super::super::{Board, Color, PieceKind, Square, SquareSet};

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ROYAL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Ray directions of a sliding piece kind; empty for the others.
pub(crate) const fn slider_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Queen => &ROYAL_DIRECTIONS,
        _ => &[],
    }
}

impl Board {
    /// Walk each ray until the edge or the first piece. An enemy blocker is
    /// included as a capture, a friendly one is not.
    pub(crate) fn slider_targets(
        &self,
        from: Square,
        color: Color,
        directions: &[(i8, i8)],
        targets: &mut SquareSet,
    ) {
        for &(df, dr) in directions {
            let mut current = from;
            while let Some(next) = current.offset(df, dr) {
                match self.piece_at(next) {
                    None => {
                        targets.insert(next);
                    }
                    Some(blocker) => {
                        if blocker.color != color {
                            targets.insert(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
    }
}
