use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use ply_chess::board::game::Game;
use ply_chess::move_generation::move_generator::DoubleCheckPolicy;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
    },
    BenchCase {
        name: "open_rook",
        fen: "8/8/8/8/3R4/8/8/8 w - - 0 1",
    },
    BenchCase {
        name: "italian_middlegame",
        fen: "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6",
    },
    BenchCase {
        name: "queen_endgame",
        fen: "8/3Q4/8/8/8/2q5/3K4/6k1 w - - 0 1",
    },
];

fn bench_fen_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen_round_trip");

    for case in CASES {
        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, case| {
            b.iter(|| {
                let game = Game::from_fen(black_box(case.fen)).expect("bench FEN should parse");
                black_box(game.fen().expect("bench board should serialize"))
            });
        });
    }

    group.finish();
}

fn bench_sliding_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sliding_moves");

    for case in CASES {
        let game = Game::from_fen(case.fen).expect("bench FEN should parse");
        let moves = game.legal_moves().expect("bench generation should succeed");
        group.throughput(Throughput::Elements(moves.len().max(1) as u64));

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &game, |b, game| {
            b.iter(|| {
                black_box(
                    game.sliding_move_report(DoubleCheckPolicy::SuppressWhenDoubleChecked)
                        .expect("bench generation should succeed"),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fen_round_trip, bench_sliding_move_generation);
criterion_main!(benches);
