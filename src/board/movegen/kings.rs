use super::super::{king_home, Board, CastleSide, CastlingRights, Color, Square, SquareSet};
use super::sliders::ROYAL_DIRECTIONS;

impl Board {
    /// Castling hops available to the king on `from`.
    ///
    /// Requires the king on its home square, clear flags for the king and the
    /// rook of that wing, empty squares between them, and neither the king's
    /// square nor the two squares it crosses under attack. The rook itself is
    /// not looked for: only its flag counts.
    pub(crate) fn castling_targets(
        &self,
        from: Square,
        color: Color,
        rights: &CastlingRights,
        targets: &mut SquareSet,
    ) {
        if from != king_home(color) || rights.flags(color).king_moved {
            return;
        }
        if self.is_square_attacked(from, color) {
            return;
        }

        for side in CastleSide::BOTH {
            if !rights.has(color, side) {
                continue;
            }

            let rook_file = side.rook_home_file();
            let (low, high) = if rook_file > from.file() {
                (from.file() + 1, rook_file)
            } else {
                (rook_file + 1, from.file())
            };
            let path_clear = (low..high).all(|file| self.is_empty(from.with_file(file)));
            if !path_clear {
                continue;
            }

            let passing = from.with_file(side.rook_target_file());
            let landing = from.with_file(side.king_target_file());
            if self.is_square_attacked(passing, color) || self.is_square_attacked(landing, color) {
                continue;
            }
            targets.insert(landing);
        }
    }

    pub(crate) fn king_step_targets(&self, from: Square, color: Color, targets: &mut SquareSet) {
        self.step_targets(from, color, &ROYAL_DIRECTIONS, targets);
    }
}
