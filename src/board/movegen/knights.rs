use super::super::{Board, Color, Square, SquareSet};

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

impl Board {
    /// Single jumps by each offset, onto empty squares or enemy pieces.
    pub(crate) fn step_targets(
        &self,
        from: Square,
        color: Color,
        offsets: &[(i8, i8)],
        targets: &mut SquareSet,
    ) {
        for &(df, dr) in offsets {
            if let Some(to) = from.offset(df, dr) {
                if self.is_empty(to) || self.is_enemy(to, color) {
                    targets.insert(to);
                }
            }
        }
    }
}
