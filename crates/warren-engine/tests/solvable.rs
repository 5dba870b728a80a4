//! End-to-end checks for the generate-and-solve pipeline.
//!
//! Every build, across random dimensions, seeds and exit policies, must
//! return a perfect maze together with a shortest path between its two
//! exits, without touching the fallback.
//!
//! The large-grid test is marked `#[ignore]`; run it with
//! `cargo test -p warren-engine -- --ignored`.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use warren_core::CellState;
use warren_engine::{build_solvable_maze, fallback_corridor, BuildConfig, MazeBuilder};
use warren_gen::ExitPlacement;
use warren_solve::{is_encircled, label_distances, solve};
use warren_test_utils::{assert_valid_solution, carved_wall_count, is_perfect};

fn placement() -> impl Strategy<Value = ExitPlacement> {
    prop_oneof![Just(ExitPlacement::Random), Just(ExitPlacement::Fixed)]
}

proptest! {
    #[test]
    fn builds_are_perfect_and_shortest(
        rows in 5usize..45,
        cols in 5usize..45,
        seed in any::<u64>(),
        exit_placement in placement(),
    ) {
        let built = MazeBuilder::new(BuildConfig {
            rows,
            cols,
            seed,
            exit_placement,
            ..BuildConfig::default()
        })
        .unwrap()
        .build()
        .unwrap();
        let maze = &built.maze;

        prop_assert!(!built.metrics.used_fallback);
        prop_assert!(is_perfect(maze));
        prop_assert_eq!(
            carved_wall_count(maze),
            (maze.rows() / 2) * (maze.cols() / 2) - 1
        );
        for exit in maze.exits() {
            prop_assert!(!is_encircled(maze, exit));
        }
        assert_valid_solution(maze, &built.path);

        // The path length matches the BFS distance of the target.
        let [source, target] = maze.exits();
        let distances = label_distances(maze, source).unwrap();
        prop_assert_eq!(
            distances.distance(target),
            Some(built.path.len() as u32)
        );
    }

    #[test]
    fn one_call_form_matches_solver(
        rows in 5usize..30,
        cols in 5usize..30,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let maze = build_solvable_maze(rows, cols, 10, &mut rng).unwrap();
        let path = solve(&maze).unwrap().unwrap();
        assert_valid_solution(&maze, &path);
    }
}

#[test]
fn solved_maze_renders_path_markers() {
    let built = MazeBuilder::new(BuildConfig {
        rows: 9,
        cols: 9,
        seed: 3,
        ..BuildConfig::default()
    })
    .unwrap()
    .build()
    .unwrap();
    let annotated = built.maze.annotated(&built.path);
    assert_eq!(
        annotated.count(|c| c == CellState::PathMarker),
        built.path.len() - 2
    );
    assert_eq!(annotated.exits(), built.maze.exits().to_vec());
}

#[test]
fn zero_attempts_yield_corridor() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for (rows, cols) in [(5, 5), (8, 13), (31, 6)] {
        let maze = build_solvable_maze(rows, cols, 0, &mut rng).unwrap();
        assert_eq!(maze, fallback_corridor(rows, cols).unwrap());
    }
}

#[test]
#[ignore]
fn large_grid_solves_first_try() {
    let built = MazeBuilder::new(BuildConfig {
        rows: 1001,
        cols: 1001,
        seed: 42,
        ..BuildConfig::default()
    })
    .unwrap()
    .build()
    .unwrap();
    assert_eq!(built.metrics.attempts, 1);
    assert!(is_perfect(&built.maze));
    assert_valid_solution(&built.maze, &built.path);
}
