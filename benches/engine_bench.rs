//! Engine Benchmarks
//!
//! Criterion benchmarks for evaluation, move generation and full decisions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gomoku_bot::eval::evaluate;
use gomoku_bot::search::{generate_moves, order_moves};
use gomoku_bot::{AIEngine, EngineConfig, GameBoard, Grid, Pos, Side};

/// Mid-game position on a 15x15 board
fn midgame() -> Grid {
    let mut grid = Grid::square(15).unwrap();
    let moves = [(7, 7), (8, 8), (6, 8), (8, 6), (7, 9), (9, 7), (5, 7), (7, 6)];
    for (i, &(x, y)) in moves.iter().enumerate() {
        let side = if i % 2 == 0 { Side::Black } else { Side::White };
        grid.play(Pos::new(x, y), side).unwrap();
    }
    grid
}

fn bench_evaluate_midgame(c: &mut Criterion) {
    let mut grid = midgame();
    c.bench_function("evaluate_midgame", |b| b.iter(|| black_box(evaluate(&mut grid, Side::Black))));
}

fn bench_evaluate_small_board_forks(c: &mut Criterion) {
    let mut grid = Grid::from_rows(&["..........", "...X......", "...XO.....", ".XX.O.....", "....O....."]).unwrap();
    c.bench_function("evaluate_10x5_with_forks", |b| {
        b.iter(|| black_box(evaluate(&mut grid, Side::White)))
    });
}

fn bench_generate_and_order(c: &mut Criterion) {
    let mut grid = midgame();
    c.bench_function("generate_and_order_moves", |b| {
        b.iter(|| {
            let moves = generate_moves(&grid, 2);
            black_box(order_moves(&mut grid, &moves, Side::Black))
        })
    });
}

fn bench_decision_depth_2(c: &mut Criterion) {
    let mut grid = midgame();
    let config = EngineConfig {
        max_depth: 2,
        use_time_limit: false,
        ..EngineConfig::default()
    };
    let mut engine = AIEngine::with_config(config);

    c.bench_function("decision_depth_2", |b| {
        b.iter(|| black_box(engine.get_move_with_stats(&mut grid, Side::Black)))
    });
}

criterion_group!(
    benches,
    bench_evaluate_midgame,
    bench_evaluate_small_board_forks,
    bench_generate_and_order,
    bench_decision_depth_2,
);
criterion_main!(benches);
