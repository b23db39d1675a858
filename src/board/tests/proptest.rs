//! Property-based tests using proptest.
//!
//! Random games are played through the executor and the invariants that
//! must hold after every move are checked along the way.

use crate::board::{Color, Move, Outcome};
use crate::game::Game;
use proptest::prelude::*;

/// Strategy to generate a random playout length
fn ply_count_strategy() -> impl Strategy<Value = usize> {
    1..=60usize
}

/// Strategy to generate a random seed for move selection
fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

fn random_move(game: &Game, rng: &mut rand::rngs::StdRng) -> Option<Move> {
    use rand::prelude::*;

    game.state().all_legal_moves().choose(rng).copied()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: no legal move ever leaves the mover's own king attacked
    #[test]
    fn prop_legal_moves_keep_king_safe(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..plies {
            let side = game.side_to_move();
            for mv in game.state().all_legal_moves() {
                let after = game.board().with_move(mv.from, mv.to);
                prop_assert!(!after.in_check(side), "{} leaves {} in check", mv, side);
            }
            match random_move(&game, &mut rng) {
                Some(mv) if !game.outcome().is_terminal() => {
                    game.play(mv).unwrap();
                }
                _ => break,
            }
        }
    }

    /// Property: kings survive, sides alternate and material never grows
    #[test]
    fn prop_playout_invariants(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..plies {
            if game.outcome().is_terminal() {
                break;
            }
            let Some(mv) = random_move(&game, &mut rng) else {
                break;
            };
            let side = game.side_to_move();
            let pieces_before = game.board().piece_count();

            let outcome = game.play(mv).unwrap();

            prop_assert_eq!(game.side_to_move(), side.opponent());
            prop_assert_eq!(outcome, game.outcome());
            prop_assert!(game.board().piece_count() <= pieces_before);
            for color in Color::BOTH {
                prop_assert!(game.board().find_king(color).is_some());
            }
            prop_assert!(!game.board().in_check(side));
            if let Outcome::Checkmate { winner } = outcome {
                prop_assert_eq!(winner, side);
            }
        }
    }

    /// Property: the terminal states agree with the move list
    #[test]
    fn prop_status_matches_move_list(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..plies {
            let Some(mv) = random_move(&game, &mut rng) else {
                break;
            };
            if game.play(mv).is_err() {
                prop_assert!(game.outcome().is_terminal());
                break;
            }
        }

        let state = game.state();
        let no_moves = state.all_legal_moves().is_empty();
        match state.outcome {
            Outcome::Checkmate { .. } | Outcome::Stalemate => prop_assert!(no_moves),
            _ => prop_assert!(!no_moves),
        }
    }

    /// Property: FEN round-trip preserves position
    #[test]
    fn prop_fen_roundtrip(seed in seed_strategy(), plies in ply_count_strategy()) {
        use rand::prelude::*;
        use crate::game::GameState;

        let mut game = Game::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..plies {
            if game.outcome().is_terminal() {
                break;
            }
            let Some(mv) = random_move(&game, &mut rng) else {
                break;
            };
            game.play(mv).unwrap();
        }

        let state = game.state();
        let parsed = GameState::from_fen(&state.to_fen());
        prop_assert_eq!(&parsed.board, &state.board);
        prop_assert_eq!(parsed.side_to_move, state.side_to_move);
        prop_assert_eq!(parsed.outcome, state.outcome);
    }
}
