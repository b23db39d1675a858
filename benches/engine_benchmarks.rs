//! Benchmarks for move generation and position classification.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chess_rules::board::{Board, Color, Square};
use chess_rules::game::{Game, GameState};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn positions() -> Vec<(&'static str, GameState)> {
    vec![
        ("startpos", GameState::new()),
        ("middlegame", GameState::from_fen(MIDDLEGAME)),
        ("kiwipete", GameState::from_fen(KIWIPETE)),
    ]
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, state) in positions() {
        group.bench_function(name, |b| b.iter(|| black_box(state.all_legal_moves())));
    }

    group.finish();
}

fn bench_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("status");

    for (name, state) in positions() {
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(
                    state
                        .board
                        .status(black_box(state.side_to_move), &state.castling_rights),
                )
            })
        });
    }

    group.finish();
}

fn bench_attacks(c: &mut Criterion) {
    let board = Board::from_fen(KIWIPETE);
    let e1: Square = "e1".parse().unwrap();

    c.bench_function("is_square_attacked", |b| {
        b.iter(|| black_box(board.is_square_attacked(black_box(e1), Color::White)))
    });
}

fn bench_execute(c: &mut Criterion) {
    c.bench_function("execute_opening", |b| {
        b.iter(|| {
            let mut game = Game::new();
            for mv in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1"] {
                game.play(mv.parse().unwrap()).unwrap();
            }
            black_box(game.outcome())
        })
    });
}

criterion_group!(
    benches,
    bench_movegen,
    bench_status,
    bench_attacks,
    bench_execute
);
criterion_main!(benches);
