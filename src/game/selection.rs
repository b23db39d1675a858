use crate::board::{Move, Outcome, Square, SquareSet};

use super::Game;

/// What a click on a square did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A piece of the side to move is now selected.
    Selected { from: Square, targets: SquareSet },
    /// The selected piece moved to the clicked square.
    Moved { mv: Move, outcome: Outcome },
    /// Nothing is selected any more.
    Cleared,
}

/// Click-to-move selection state for one board.
///
/// Clicking a piece of the side to move selects it and highlights its legal
/// destinations; clicking one of those destinations plays the move; any
/// other click drops the selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    selected: Option<Square>,
}

impl Selector {
    #[must_use]
    pub const fn new() -> Self {
        Selector { selected: None }
    }

    #[inline]
    #[must_use]
    pub const fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn click(&mut self, game: &mut Game, square: Square) -> SelectionEvent {
        if let Some(from) = self.selected {
            if from != square && game.is_move_legal(from, square) {
                self.selected = None;
                game.clear_highlights();
                return match game.execute(from, square, None) {
                    Ok(outcome) => SelectionEvent::Moved {
                        mv: game.state().last_move.unwrap_or(Move::new(from, square)),
                        outcome,
                    },
                    Err(_) => SelectionEvent::Cleared,
                };
            }
        }

        let selectable = !game.outcome().is_terminal()
            && game
                .board()
                .piece_at(square)
                .is_some_and(|piece| piece.color == game.side_to_move());
        if selectable {
            self.selected = Some(square);
            let targets = game.highlight_moves(square);
            SelectionEvent::Selected {
                from: square,
                targets,
            }
        } else {
            self.selected = None;
            game.clear_highlights();
            SelectionEvent::Cleared
        }
    }
}
