//! Errors surfaced by the build loop.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;
use warren_core::MazeError;
use warren_solve::SolveError;

/// Errors from [`MazeBuilder`](crate::MazeBuilder) and
/// [`build_solvable_maze`](crate::build_solvable_maze).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// A maze source returned an error.
    Maze(MazeError),
    /// Solving hit an internal invariant violation.
    Solve(SolveError),
    /// Every attempt failed and the fallback is disabled.
    Unsolvable {
        /// Number of attempts made.
        attempts: u32,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Maze(e) => write!(f, "maze: {e}"),
            Self::Solve(e) => write!(f, "solve: {e}"),
            Self::Unsolvable { attempts } => {
                write!(f, "no solvable maze after {attempts} attempts")
            }
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Maze(e) => Some(e),
            Self::Solve(e) => Some(e),
            Self::Unsolvable { .. } => None,
        }
    }
}

impl From<ConfigError> for BuildError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<MazeError> for BuildError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

impl From<SolveError> for BuildError {
    fn from(e: SolveError) -> Self {
        Self::Solve(e)
    }
}
