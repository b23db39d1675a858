use std::env;
use std::process::ExitCode;

use chess_rules::board::{Color, Move};
use chess_rules::game::Game;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return ExitCode::FAILURE;
    }

    let mut game = Game::new();
    for text in args.iter().skip(1) {
        let mv: Move = match text.parse() {
            Ok(mv) => mv,
            Err(e) => {
                eprintln!("{text}: {e}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(e) = game.play(mv) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    let state = game.state();
    let legal_moves = state.all_legal_moves();
    let rights = &state.castling_rights;
    println!(
        "side_to_move: {}",
        if state.side_to_move == Color::White { "white" } else { "black" }
    );
    println!("legal_moves: {}", legal_moves.len());
    println!(
        "checkmate: {}",
        state.board.is_checkmate(state.side_to_move, rights)
    );
    println!(
        "stalemate: {}",
        state.board.is_stalemate(state.side_to_move, rights)
    );
    println!("status: {}", state.outcome);
    for mv in &legal_moves {
        println!("{mv}");
    }
    ExitCode::SUCCESS
}
