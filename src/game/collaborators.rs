//! Hooks the front end plugs into a [`Game`](super::Game).
//!
//! All three are optional. Without a chooser every promotion is a queen;
//! without a renderer or notifier nothing is drawn or played.

use super::GameState;
use crate::board::{Color, PromotionKind, Square, SquareSet};

/// Asked which piece a pawn becomes when it reaches its last rank.
pub trait PromotionChooser {
    /// `None` means "no answer" and is played as a queen.
    fn choose(&mut self, color: Color, square: Square) -> Option<PromotionKind>;
}

impl<F> PromotionChooser for F
where
    F: FnMut(Color, Square) -> Option<PromotionKind>,
{
    fn choose(&mut self, color: Color, square: Square) -> Option<PromotionKind> {
        self(color, square)
    }
}

/// Draws the game.
pub trait Renderer {
    /// Called with the new state after every executed move.
    fn render(&mut self, state: &GameState);

    /// Show the legal destinations of the selected piece.
    fn highlight_moves(&mut self, _from: Square, _targets: &SquareSet) {}

    /// Remove destination highlights.
    fn clear_highlights(&mut self) {}
}

/// Plays a sound once per completed move.
pub trait AudioNotifier {
    fn move_played(&mut self);
}

impl<F> AudioNotifier for F
where
    F: FnMut(),
{
    fn move_played(&mut self) {
        self();
    }
}
