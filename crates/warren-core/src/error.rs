//! Error types for the Warren data model.
//!
//! Organized by the type whose invariant was violated: grid access,
//! maze construction, and path construction.

use crate::cell::CellState;
use crate::position::Position;
use std::error::Error;
use std::fmt;

/// Errors from grid construction or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// A position lies outside the grid.
    OutOfBounds {
        /// The offending position.
        pos: Position,
        /// Number of rows in the grid.
        rows: usize,
        /// Number of columns in the grid.
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::OutOfBounds { pos, rows, cols } => {
                write!(f, "position {pos} out of bounds: [0, {rows}) x [0, {cols})")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from maze construction and validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// A requested dimension is below the minimum maze size.
    InvalidDimensions {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Smallest accepted value for either dimension.
        min: usize,
    },
    /// The grid does not contain exactly two exit cells.
    ExitCount {
        /// Number of exit cells found.
        found: usize,
    },
    /// The grid contains a solver annotation where only topology is allowed.
    AnnotatedCell {
        /// Position of the first annotated cell (row-major).
        pos: Position,
        /// The annotation found there.
        state: CellState,
    },
    /// Underlying grid operation failed.
    Grid(GridError),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { rows, cols, min } => {
                write!(f, "maze dimensions {rows}x{cols} invalid: both must be at least {min}")
            }
            Self::ExitCount { found } => {
                write!(f, "maze must have exactly 2 exits, found {found}")
            }
            Self::AnnotatedCell { pos, state } => {
                write!(f, "cell {pos} holds solver annotation {state:?}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for MazeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for MazeError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors from [`Path`](crate::Path) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// A path must contain at least one position.
    Empty,
    /// Two consecutive positions are not orthogonally adjacent.
    NotAdjacent {
        /// Index of the first position of the offending pair.
        index: usize,
        /// Position at `index`.
        from: Position,
        /// Position at `index + 1`.
        to: Position,
    },
    /// A position occurs more than once.
    Repeated {
        /// The repeated position.
        pos: Position,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "path is empty"),
            Self::NotAdjacent { index, from, to } => {
                write!(f, "path step {index} from {from} to {to} is not adjacent")
            }
            Self::Repeated { pos } => write!(f, "path visits {pos} more than once"),
        }
    }
}

impl Error for PathError {}
