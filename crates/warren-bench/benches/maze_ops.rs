//! Criterion micro-benchmarks for generation and solving.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warren_bench::seeded_mazes;
use warren_gen::{ExitPlacement, MazeGenerator};
use warren_solve::{is_encircled, label_distances, solve};

/// Benchmark: Generate a 101x101 maze (2500 tree nodes).
fn bench_generate_101(c: &mut Criterion) {
    let generator = MazeGenerator::new(101, 101)
        .unwrap()
        .exit_placement(ExitPlacement::Random);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    c.bench_function("generate_101x101", |b| {
        b.iter(|| {
            let maze = generator.generate(&mut rng).unwrap();
            black_box(maze);
        });
    });
}

/// Benchmark: Label BFS distances over a whole 101x101 maze.
fn bench_label_distances_101(c: &mut Criterion) {
    let maze = &seeded_mazes(101, 101, 1, 7).unwrap()[0];
    let source = maze.exits()[0];

    c.bench_function("label_distances_101x101", |b| {
        b.iter(|| {
            let labels = label_distances(maze, source).unwrap();
            black_box(labels.rounds());
        });
    });
}

/// Benchmark: Solve 16 different 101x101 mazes end to end.
fn bench_solve_batch_101(c: &mut Criterion) {
    let mazes = seeded_mazes(101, 101, 16, 0).unwrap();

    c.bench_function("solve_batch_16x101x101", |b| {
        b.iter(|| {
            for maze in &mazes {
                let path = solve(maze).unwrap();
                black_box(&path);
            }
        });
    });
}

/// Benchmark: Encirclement check on both exits of 16 mazes.
fn bench_encircle_batch(c: &mut Criterion) {
    let mazes = seeded_mazes(101, 101, 16, 0).unwrap();

    c.bench_function("encircle_batch_16", |b| {
        b.iter(|| {
            for maze in &mazes {
                for exit in maze.exits() {
                    black_box(is_encircled(maze, exit));
                }
            }
        });
    });
}

criterion_group!(
    benches,
    bench_generate_101,
    bench_label_distances_101,
    bench_solve_batch_101,
    bench_encircle_batch,
);
criterion_main!(benches);
