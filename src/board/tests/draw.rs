//! Stalemate, insufficient material and status priority.

use crate::board::{Board, CastlingRights, Color, Outcome};
use crate::game::GameState;

fn insufficient(placement: &str) -> bool {
    Board::from_fen(placement).is_insufficient_material()
}

#[test]
fn test_insufficient_material() {
    assert!(insufficient("4k3/8/8/8/8/8/8/4K3"));
    assert!(insufficient("4k3/8/8/8/8/8/8/4KN2"));
    assert!(insufficient("4kb2/8/8/8/8/8/8/4K3"));

    assert!(!insufficient("4k3/8/8/8/8/8/4P3/4K3"));
    assert!(!insufficient("4k3/8/8/8/8/8/8/R3K3"));
    assert!(!insufficient("4k3/8/8/8/8/8/8/2B1KN2"));
    assert!(!insufficient("4kb2/8/8/8/8/8/8/2B1K3"));
    assert!(!insufficient("4k3/8/8/8/8/8/8/q3K3"));
}

#[test]
fn test_starting_position_has_enough_material() {
    assert!(!Board::new().is_insufficient_material());
}

#[test]
fn test_stalemate() {
    let state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b -");
    let rights = CastlingRights::none();
    assert!(!state.board.in_check(Color::Black));
    assert!(state.board.is_stalemate(Color::Black, &rights));
    assert!(!state.board.is_checkmate(Color::Black, &rights));
    assert_eq!(state.outcome, Outcome::Stalemate);
    assert!(state.outcome.is_draw());
    assert_eq!(state.outcome.winner(), None);
}

#[test]
fn test_stalemate_only_applies_to_side_to_move() {
    // Same position, white to move: white has plenty of moves.
    let state = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 w -");
    assert_eq!(state.outcome, Outcome::Ongoing);
}

#[test]
fn test_stalemate_beats_insufficient_material() {
    let state = GameState::from_fen("k7/8/1K6/8/8/8/7B/8 b -");
    assert!(state.board.is_insufficient_material());
    assert_eq!(state.outcome, Outcome::Stalemate);
}

#[test]
fn test_insufficient_material_beats_check() {
    let state = GameState::from_fen("4k3/8/8/1B6/8/8/8/4K3 b -");
    assert!(state.board.in_check(Color::Black));
    assert_eq!(state.outcome, Outcome::InsufficientMaterial);
    assert!(state.outcome.is_terminal());
}

#[test]
fn test_check_reported_for_side_to_move() {
    let state = GameState::from_fen("4k3/8/8/8/8/8/4R3/3K4 b -");
    assert_eq!(
        state.outcome,
        Outcome::Check {
            side: Color::Black
        }
    );
    assert!(!state.outcome.is_terminal());
}

#[test]
fn test_checkmate() {
    let state = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b -");
    let rights = CastlingRights::none();
    assert!(state.board.is_checkmate(Color::Black, &rights));
    assert!(!state.board.is_stalemate(Color::Black, &rights));
    assert_eq!(
        state.outcome,
        Outcome::Checkmate {
            winner: Color::White
        }
    );
    assert_eq!(state.outcome.winner(), Some(Color::White));
    assert_eq!(state.outcome.to_string(), "Checkmate! White wins!");
}
