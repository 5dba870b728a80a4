//! Error types for maze solving.

use std::error::Error;
use std::fmt;
use warren_core::{PathError, Position};

/// Errors from distance labeling and path reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The wave-front source is out of bounds or not an open cell.
    InvalidSource {
        /// The rejected source position.
        pos: Position,
    },
    /// The target carries no distance label: it is unreachable from the
    /// source.
    NotFound {
        /// The unreachable target.
        target: Position,
    },
    /// A labeled cell has no neighbour one step closer to the source.
    ///
    /// Never produced for a distance grid built by
    /// [`label_distances`](crate::label_distances); signals an internal
    /// invariant violation.
    ReconstructionInconsistency {
        /// Cell at which the walk got stuck.
        at: Position,
        /// Distance label of that cell.
        distance: u32,
    },
    /// The reconstructed walk failed path validation.
    Path(PathError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSource { pos } => {
                write!(f, "wave-front source {pos} is not an open cell")
            }
            Self::NotFound { target } => write!(f, "no path reaches {target}"),
            Self::ReconstructionInconsistency { at, distance } => {
                write!(f, "no predecessor for {at} at distance {distance}")
            }
            Self::Path(e) => write!(f, "path: {e}"),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Path(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PathError> for SolveError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}
