//! Sharing one game between threads.
//!
//! Moves are applied one at a time under a write lock; queries take a read
//! lock and may run between moves but never during one.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::board::{Move, MoveError, Outcome, PromotionKind, Square, SquareSet};
use crate::game::{Game, GameState};

/// A clonable handle to a single game.
#[derive(Clone, Debug)]
pub struct SharedGame(Arc<RwLock<Game>>);

impl SharedGame {
    #[must_use]
    pub fn new(game: Game) -> Self {
        SharedGame(Arc::new(RwLock::new(game)))
    }

    /// Apply a move. Concurrent callers are serialized.
    pub fn execute(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PromotionKind>,
    ) -> Result<Outcome, MoveError> {
        self.0.write().execute(from, to, promotion)
    }

    pub fn play(&self, mv: Move) -> Result<Outcome, MoveError> {
        self.0.write().play(mv)
    }

    #[must_use]
    pub fn legal_moves(&self, square: Square) -> SquareSet {
        self.0.read().legal_moves(square)
    }

    #[must_use]
    pub fn is_move_legal(&self, from: Square, to: Square) -> bool {
        self.0.read().is_move_legal(from, to)
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn current_state(&self) -> GameState {
        self.0.read().state().clone()
    }

    /// Run `f` with read access to the game.
    pub fn with_game<R>(&self, f: impl FnOnce(&Game) -> R) -> R {
        f(&*self.0.read())
    }
}

impl Default for SharedGame {
    fn default() -> Self {
        Self::new(Game::new())
    }
}

impl From<Game> for SharedGame {
    fn from(game: Game) -> Self {
        SharedGame::new(game)
    }
}
