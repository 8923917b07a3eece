//! Benchmarks for the exact minimax search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use krow::{Agent, Board, MinimaxAgent};

fn bench_full_search(c: &mut Criterion) {
    c.bench_function("full_search_empty_3x3", |b| {
        let board = Board::standard();
        let mut agent = MinimaxAgent::new();
        b.iter(|| agent.choose_move(black_box(&board)).unwrap());
    });

    c.bench_function("full_search_after_center_opening", |b| {
        let mut board = Board::standard();
        assert!(board.play(4).unwrap().is_placed());
        let mut agent = MinimaxAgent::new();
        b.iter(|| agent.choose_move(black_box(&board)).unwrap());
    });
}

criterion_group!(benches, bench_full_search);
criterion_main!(benches);
