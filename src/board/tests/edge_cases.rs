//! Executor edge cases: promotion, captures and rejected moves.

use std::sync::{Arc, Mutex};

use super::sq;
use crate::board::{Color, Move, MoveError, Outcome, Piece, PieceKind, PromotionKind, Square};
use crate::game::{Game, GameState};

const PROMOTION: &str = "4k3/P7/8/8/8/8/8/4K3 w -";

fn game(fen: &str) -> Game {
    Game::from_state(GameState::from_fen(fen))
}

#[test]
fn test_promotion_defaults_to_queen() {
    let mut game = game(PROMOTION);
    let outcome = game.execute(sq("a7"), sq("a8"), None).unwrap();

    assert_eq!(
        game.board().piece_at(sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
    assert_eq!(
        outcome,
        Outcome::Check {
            side: Color::Black
        }
    );
    assert_eq!(
        game.state().last_move,
        Some(Move::with_promotion(sq("a7"), sq("a8"), PromotionKind::Queen))
    );
}

#[test]
fn test_explicit_underpromotion() {
    let mut game = game(PROMOTION);
    let outcome = game
        .execute(sq("a7"), sq("a8"), Some(PromotionKind::Knight))
        .unwrap();

    assert_eq!(
        game.board().piece_at(sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
    // King and knight against a bare king.
    assert_eq!(outcome, Outcome::InsufficientMaterial);
}

#[test]
fn test_promotion_chooser_is_asked() {
    let asked = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&asked);
    let mut game = game(PROMOTION).with_promotion_chooser(move |color: Color, square: Square| {
        log.lock().unwrap().push((color, square));
        Some(PromotionKind::Rook)
    });

    game.execute(sq("a7"), sq("a8"), None).unwrap();
    assert_eq!(
        game.board().piece_at(sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(*asked.lock().unwrap(), vec![(Color::White, sq("a8"))]);
}

#[test]
fn test_explicit_choice_skips_chooser() {
    let mut game = game(PROMOTION)
        .with_promotion_chooser(|_: Color, _: Square| -> Option<PromotionKind> {
            panic!("chooser asked despite an explicit choice")
        });
    game.execute(sq("a7"), sq("a8"), Some(PromotionKind::Bishop))
        .unwrap();
    assert_eq!(
        game.board().piece_at(sq("a8")).map(|p| p.kind),
        Some(PieceKind::Bishop)
    );
}

#[test]
fn test_chooser_without_answer_gives_queen() {
    let mut game = game(PROMOTION)
        .with_promotion_chooser(|_: Color, _: Square| -> Option<PromotionKind> { None });
    game.execute(sq("a7"), sq("a8"), None).unwrap();
    assert_eq!(
        game.board().piece_at(sq("a8")).map(|p| p.kind),
        Some(PieceKind::Queen)
    );
}

#[test]
fn test_black_promotes_on_first_rank() {
    let mut game = game("4k3/8/8/8/8/8/p7/4K3 b -");
    let outcome = game.execute(sq("a2"), sq("a1"), None).unwrap();
    assert_eq!(
        game.board().piece_at(sq("a1")),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(
        outcome,
        Outcome::Check {
            side: Color::White
        }
    );
}

#[test]
fn test_promotion_by_capture() {
    let mut game = game("r3k3/1P6/8/8/8/8/8/4K3 w -");
    assert!(game.is_move_legal(sq("b7"), sq("a8")));
    game.execute(sq("b7"), sq("a8"), None).unwrap();
    assert_eq!(game.board().piece_count(), 3);
    assert_eq!(
        game.board().piece_at(sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
}

#[test]
fn test_capture_removes_piece() {
    let mut game = Game::new();
    for mv in ["e2e4", "d7d5"] {
        game.play(mv.parse().unwrap()).unwrap();
    }
    game.play("e4d5".parse().unwrap()).unwrap();
    assert_eq!(game.board().piece_count(), 31);
    assert_eq!(
        game.board().piece_at(sq("d5")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
}

#[test]
fn test_back_rank_mate() {
    let mut game = game("6k1/5ppp/8/8/8/8/8/R5K1 w -");
    let outcome = game.execute(sq("a1"), sq("a8"), None).unwrap();
    assert_eq!(
        outcome,
        Outcome::Checkmate {
            winner: Color::White
        }
    );
    assert!(game.legal_moves(sq("g8")).is_empty());
    assert!(!game.is_move_legal(sq("g8"), sq("h8")));
    assert_eq!(
        game.execute(sq("g8"), sq("h8"), None),
        Err(MoveError::GameOver { outcome })
    );
}

#[test]
fn test_rejected_moves_leave_state_untouched() {
    let mut game = Game::new();
    let before = game.state().clone();

    // Opponent's piece, empty square, unreachable target.
    for (from, to) in [("e7", "e5"), ("e4", "e5"), ("e2", "e5"), ("e1", "e2")] {
        assert_eq!(
            game.execute(sq(from), sq(to), None),
            Err(MoveError::IllegalMove {
                from: sq(from),
                to: sq(to)
            })
        );
    }
    assert_eq!(game.state(), &before);
}

#[test]
fn test_cannot_expose_own_king() {
    let mut game = game("4k3/4r3/8/8/8/8/4B3/4K3 w -");
    assert!(game.legal_moves(sq("e2")).is_empty());
    assert!(game.execute(sq("e2"), sq("d3"), None).is_err());
    assert_eq!(game.side_to_move(), Color::White);
}
