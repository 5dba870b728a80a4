//! Bounded generate-and-solve orchestration for Warren mazes.
//!
//! [`MazeBuilder`] repeatedly generates a maze and solves it until one
//! attempt yields a path, up to a hard attempt limit. When every attempt
//! fails it falls back to [`fallback_corridor`], a straight corridor that
//! is solvable by construction. [`build_solvable_maze`] is the one-call
//! form for callers that only want the maze.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod fallback;
pub mod metrics;
pub mod orchestrator;

pub use config::{BuildConfig, ConfigError, MAX_ATTEMPTS_CAP};
pub use error::BuildError;
pub use fallback::fallback_corridor;
pub use metrics::BuildMetrics;
pub use orchestrator::{build_solvable_maze, BuiltMaze, MazeBuilder};
