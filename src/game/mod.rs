//! A single game: the canonical state plus the move executor.
//!
//! `Game` owns the only mutable copy of the position. Queries borrow it;
//! [`Game::execute`] is the one place it changes.
//!
//! # Example
//! ```
//! use chess_rules::game::Game;
//! use chess_rules::board::Outcome;
//!
//! let mut game = Game::new();
//! let outcome = game
//!     .execute("e2".parse().unwrap(), "e4".parse().unwrap(), None)
//!     .unwrap();
//! assert_eq!(outcome, Outcome::Ongoing);
//! ```

pub mod collaborators;
mod selection;

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{
    rook_home, Board, CastleSide, CastlingRights, Color, Move, MoveError, Outcome, Piece,
    PieceKind, PromotionKind, Square, SquareSet,
};
pub use collaborators::{AudioNotifier, PromotionChooser, Renderer};
pub use selection::{SelectionEvent, Selector};

/// Everything a front end needs to draw the game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Only used for highlighting; the rules never look at it.
    pub last_move: Option<Move>,
    /// Classification of the position for `side_to_move`.
    pub outcome: Outcome,
}

impl GameState {
    /// The standard initial position, white to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Board::new(), Color::White, CastlingRights::all())
    }

    /// Assemble a state from a board, classifying it for `side_to_move`.
    #[must_use]
    pub fn from_parts(board: Board, side_to_move: Color, castling_rights: CastlingRights) -> Self {
        let outcome = board.status(side_to_move, &castling_rights);
        GameState {
            board,
            side_to_move,
            castling_rights,
            last_move: None,
            outcome,
        }
    }

    /// Legal destinations of the piece on `square`, whichever side owns it.
    #[must_use]
    pub fn legal_moves(&self, square: Square) -> SquareSet {
        self.board.legal_moves(square, &self.castling_rights)
    }

    /// Every legal move of the side to move.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.board
            .all_legal_moves(self.side_to_move, &self.castling_rights)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

type Chooser = Box<dyn PromotionChooser + Send + Sync>;
type BoxedRenderer = Box<dyn Renderer + Send + Sync>;
type Notifier = Box<dyn AudioNotifier + Send + Sync>;

/// A game in progress and its front-end hooks.
pub struct Game {
    state: GameState,
    promotion_chooser: Option<Chooser>,
    renderer: Option<BoxedRenderer>,
    audio: Option<Notifier>,
}

impl Game {
    /// A game from the standard initial position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(GameState::new())
    }

    /// Continue from an existing state.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Game {
            state,
            promotion_chooser: None,
            renderer: None,
            audio: None,
        }
    }

    /// Start from a custom arrangement.
    #[must_use]
    pub fn from_setup(board: Board, side_to_move: Color, castling_rights: CastlingRights) -> Self {
        Self::from_state(GameState::from_parts(board, side_to_move, castling_rights))
    }

    #[must_use]
    pub fn with_promotion_chooser(
        mut self,
        chooser: impl PromotionChooser + Send + Sync + 'static,
    ) -> Self {
        self.promotion_chooser = Some(Box::new(chooser));
        self
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: impl Renderer + Send + Sync + 'static) -> Self {
        self.renderer = Some(Box::new(renderer));
        self
    }

    #[must_use]
    pub fn with_audio_notifier(
        mut self,
        audio: impl AudioNotifier + Send + Sync + 'static,
    ) -> Self {
        self.audio = Some(Box::new(audio));
        self
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Legal destinations of the piece on `square`; empty for an empty square.
    #[must_use]
    pub fn legal_moves(&self, square: Square) -> SquareSet {
        self.state.legal_moves(square)
    }

    /// Whether `execute(from, to, _)` would be accepted: the game is not
    /// over, the piece on `from` belongs to the side to move, and `to` is
    /// one of its legal destinations.
    #[must_use]
    pub fn is_move_legal(&self, from: Square, to: Square) -> bool {
        if self.state.outcome.is_terminal() {
            return false;
        }
        match self.state.board.piece_at(from) {
            Some(piece) if piece.color == self.state.side_to_move => {
                self.legal_moves(from).contains(&to)
            }
            _ => false,
        }
    }

    /// Play a move given as a `Move` value.
    pub fn play(&mut self, mv: Move) -> Result<Outcome, MoveError> {
        self.execute(mv.from, mv.to, mv.promotion)
    }

    /// Apply a move to the live state and classify the new position.
    ///
    /// A pawn reaching its last rank becomes `promotion` if given, otherwise
    /// whatever the promotion chooser answers, otherwise a queen. Castling
    /// moves the rook next to the king. Afterwards the audio notifier and
    /// the renderer are called, in that order.
    pub fn execute(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionKind>,
    ) -> Result<Outcome, MoveError> {
        if self.state.outcome.is_terminal() {
            return Err(MoveError::GameOver {
                outcome: self.state.outcome,
            });
        }
        let piece = match self.state.board.piece_at(from) {
            Some(piece) if self.is_move_legal(from, to) => piece,
            _ => return Err(MoveError::IllegalMove { from, to }),
        };
        let color = piece.color;

        #[cfg(feature = "logging")]
        log::debug!("{color} {} {from}{to}", piece.kind);

        self.state.castling_rights.record_departure(piece, from);
        if piece.kind == PieceKind::King {
            if let Some(side) = CastleSide::from_king_move(color, from, to) {
                self.move_castling_rook(color, side);
            }
        }

        let reaches_last_rank = to.rank() == color.pawn_promotion_rank();
        let promoted = if piece.kind == PieceKind::Pawn && reaches_last_rank {
            Some(self.choose_promotion(color, to, promotion))
        } else {
            None
        };
        let placed = promoted.map_or(piece, |kind| Piece::new(color, kind.kind()));

        self.state.board.remove_piece(from);
        self.state.board.set_piece(to, placed);
        self.state.last_move = Some(Move {
            from,
            to,
            promotion: promoted,
        });
        self.state.side_to_move = color.opponent();
        self.state.outcome = self
            .state
            .board
            .status(self.state.side_to_move, &self.state.castling_rights);

        #[cfg(feature = "logging")]
        {
            if self.state.outcome.is_terminal() {
                log::info!("{}", self.state.outcome);
            }
        }

        if let Some(audio) = self.audio.as_mut() {
            audio.move_played();
        }
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&self.state);
        }
        Ok(self.state.outcome)
    }

    /// Hand the legal destinations of `from` to the renderer and return them.
    pub fn highlight_moves(&mut self, from: Square) -> SquareSet {
        let targets = self.legal_moves(from);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.clear_highlights();
            renderer.highlight_moves(from, &targets);
        }
        targets
    }

    pub fn clear_highlights(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.clear_highlights();
        }
    }

    /// Move the friendly rook from its home square to the square the king
    /// crossed. Nothing moves if that rook is no longer there.
    fn move_castling_rook(&mut self, color: Color, side: CastleSide) {
        let home = rook_home(color, side);
        let rook = Piece::new(color, PieceKind::Rook);
        if self.state.board.piece_at(home) != Some(rook) {
            return;
        }
        let target = home.with_file(side.rook_target_file());
        self.state.board.relocate(home, target);

        #[cfg(feature = "logging")]
        log::trace!("{color} rook {home} -> {target}");
    }

    fn choose_promotion(
        &mut self,
        color: Color,
        square: Square,
        explicit: Option<PromotionKind>,
    ) -> PromotionKind {
        let choice = explicit
            .or_else(|| {
                self.promotion_chooser
                    .as_mut()
                    .and_then(|chooser| chooser.choose(color, square))
            })
            .unwrap_or_default();

        #[cfg(feature = "logging")]
        log::trace!("{color} pawn on {square} promotes to {}", choice.kind());

        choice
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("promotion_chooser", &self.promotion_chooser.is_some())
            .field("renderer", &self.renderer.is_some())
            .field("audio", &self.audio.is_some())
            .finish()
    }
}
