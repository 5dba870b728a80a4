//! Warren: perfect maze generation and shortest-path solving.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Warren sub-crates. For most users, adding `warren` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use warren::prelude::*;
//!
//! // Generate a 9x15 maze with random boundary exits.
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let maze = generate(9, 15, ExitPlacement::Random, &mut rng).unwrap();
//! assert_eq!(maze.grid().exits().len(), 2);
//!
//! // Solve it from the first exit to the second.
//! let path = solve(&maze).unwrap().expect("generated mazes are connected");
//! let [source, target] = maze.exits();
//! assert_eq!((path.first(), path.last()), (source, target));
//!
//! // Or let the engine retry and fall back for you.
//! let built = MazeBuilder::new(BuildConfig::default()).unwrap().build().unwrap();
//! println!("{}", built.maze.annotated(&built.path));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | Cells, positions, grids, mazes, paths, core errors |
//! | [`gen`] | `warren-gen` | Binary-tree generation and exit placement |
//! | [`solve`] | `warren-solve` | Encirclement check, wave-front labeling, reconstruction |
//! | [`engine`] | `warren-engine` | Bounded retry orchestration and the fallback corridor |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core grid types (`warren-core`).
///
/// Contains [`types::CellState`], [`types::Position`], [`types::Grid`],
/// [`types::Maze`], [`types::Path`] and their error types.
pub use warren_core as types;

/// Maze generation (`warren-gen`).
///
/// [`gen::MazeGenerator`] carves a binary-tree spanning tree and places
/// two exits according to [`gen::ExitPlacement`].
pub use warren_gen as gen;

/// Maze solving (`warren-solve`).
///
/// [`solve::solve`] returns the shortest path between the two exits;
/// [`solve::label_distances`] exposes the underlying BFS labeling.
pub use warren_solve as solve;

/// Generate-and-solve orchestration (`warren-engine`).
///
/// [`engine::MazeBuilder`] for configurable builds,
/// [`engine::build_solvable_maze`] for the one-call form.
pub use warren_engine as engine;

/// Common imports for typical Warren usage.
///
/// ```rust
/// use warren::prelude::*;
/// ```
///
/// This imports the grid types, the generator, the solver entry points and
/// the engine builder.
pub mod prelude {
    // Core types
    pub use warren_core::{CellState, Direction, Grid, Maze, Path, Position};

    // Errors
    pub use warren_core::{GridError, MazeError, PathError};
    pub use warren_engine::{BuildError, ConfigError};
    pub use warren_solve::SolveError;

    // Generation
    pub use warren_gen::{generate, generate_seeded, ExitPlacement, MazeGenerator};

    // Solving
    pub use warren_solve::{is_encircled, solve, solve_detailed, Solution};

    // Engine
    pub use warren_engine::{
        build_solvable_maze, fallback_corridor, BuildConfig, BuildMetrics, BuiltMaze, MazeBuilder,
    };
}
