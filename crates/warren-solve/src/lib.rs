//! Wave-front shortest path solving for Warren mazes.
//!
//! Solving is split into three stages, each usable on its own:
//!
//! 1. [`is_encircled`] — cheap check that an exit touches the interior.
//! 2. [`label_distances`] — breadth-first distance labeling from a source
//!    exit with strict frontier/next-frontier separation.
//! 3. [`reconstruct`] — walk the labels back from the target exit.
//!
//! [`solve`] composes them and returns `Ok(None)` when no path exists.
//! The maze is only borrowed; labeling works on a private copy.
//!
//! ```
//! use warren_gen::{generate_seeded, ExitPlacement};
//! use warren_solve::solve;
//!
//! let maze = generate_seeded(9, 9, ExitPlacement::Fixed, 1).unwrap();
//! let path = solve(&maze).unwrap().expect("generated mazes are solvable");
//! assert_eq!(path.first(), maze.exits()[0]);
//! assert_eq!(path.last(), maze.exits()[1]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod encircle;
pub mod error;
pub mod metrics;
pub mod reconstruct;
pub mod solve;
pub mod wavefront;

pub use encircle::is_encircled;
pub use error::SolveError;
pub use metrics::SolveMetrics;
pub use reconstruct::reconstruct;
pub use solve::{solve, solve_detailed, Solution};
pub use wavefront::{label_distances, label_distances_until, DistanceGrid};
