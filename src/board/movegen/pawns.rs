use super::super::{Board, Color, Square, SquareSet};

impl Board {
    /// Pushes onto empty squares and diagonal captures onto enemy pieces.
    pub(crate) fn pawn_targets(&self, from: Square, color: Color, targets: &mut SquareSet) {
        let dir = color.pawn_direction();

        if let Some(one_ahead) = from.offset(0, dir) {
            if self.is_empty(one_ahead) {
                targets.insert(one_ahead);
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two_ahead) = from.offset(0, 2 * dir) {
                        if self.is_empty(two_ahead) {
                            targets.insert(two_ahead);
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(diagonal) = from.offset(df, dir) {
                if self.is_enemy(diagonal, color) {
                    targets.insert(diagonal);
                }
            }
        }
    }
}
