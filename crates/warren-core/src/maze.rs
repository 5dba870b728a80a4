//! Validated maze: a topology-only grid with exactly two exits.

use crate::cell::CellState;
use crate::error::MazeError;
use crate::grid::Grid;
use crate::path::Path;
use crate::position::Position;

/// A grid holding only maze topology and exactly two `Exit` cells.
///
/// `Maze` is the input to every solver operation. Construction through
/// [`Maze::from_grid`] guarantees:
/// - every cell is `Wall`, `Passage` or `Exit`,
/// - there are exactly two exits, stored in row-major order.
///
/// Mazes built by the generator are additionally *perfect*: their open
/// cells form a spanning tree under 4-adjacency.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    exits: [Position; 2],
}

impl Maze {
    /// Smallest accepted value for either generated dimension.
    pub const MIN_DIM: usize = 5;

    /// Apply the dimension policy used by generation and fallback layouts.
    ///
    /// A dimension below [`MIN_DIM`](Self::MIN_DIM) is rejected with
    /// [`MazeError::InvalidDimensions`]. An even dimension is rounded down
    /// to the next odd value so that the outer ring is wall and node cells
    /// sit on odd indices.
    ///
    /// ```
    /// use warren_core::Maze;
    ///
    /// assert_eq!(Maze::normalize_dimensions(15, 15), Ok((15, 15)));
    /// assert_eq!(Maze::normalize_dimensions(10, 6), Ok((9, 5)));
    /// assert!(Maze::normalize_dimensions(4, 9).is_err());
    /// ```
    pub fn normalize_dimensions(rows: usize, cols: usize) -> Result<(usize, usize), MazeError> {
        if rows < Self::MIN_DIM || cols < Self::MIN_DIM {
            return Err(MazeError::InvalidDimensions {
                rows,
                cols,
                min: Self::MIN_DIM,
            });
        }
        let odd = |n: usize| if n % 2 == 0 { n - 1 } else { n };
        Ok((odd(rows), odd(cols)))
    }

    /// Validate `grid` as a maze.
    ///
    /// Returns `Err(MazeError::AnnotatedCell)` if any cell carries a
    /// `Distance` or `PathMarker` state, and `Err(MazeError::ExitCount)`
    /// unless exactly two cells are `Exit`.
    pub fn from_grid(grid: Grid) -> Result<Self, MazeError> {
        if let Some((pos, state)) = grid.iter().find(|&(_, s)| !s.is_topology()) {
            return Err(MazeError::AnnotatedCell { pos, state });
        }
        let exits = grid.exits();
        match exits.as_slice() {
            &[a, b] => Ok(Self { grid, exits: [a, b] }),
            other => Err(MazeError::ExitCount { found: other.len() }),
        }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The two exits in row-major order.
    pub fn exits(&self) -> [Position; 2] {
        self.exits
    }

    /// Cell state at `pos`, or `None` if out of bounds.
    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.grid.get(pos)
    }

    /// Consume the maze, returning its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// A copy of the grid with `path` drawn onto it.
    ///
    /// Every path cell that is a `Passage` becomes `PathMarker`; exits keep
    /// their `Exit` state so renderers can still tell them apart. Path
    /// positions outside the grid are ignored.
    pub fn annotated(&self, path: &Path) -> Grid {
        let mut grid = self.grid.clone();
        for &pos in path {
            if grid.get(pos) == Some(CellState::Passage) {
                // In bounds: `get` just returned a state.
                let _ = grid.set(pos, CellState::PathMarker);
            }
        }
        grid
    }
}
