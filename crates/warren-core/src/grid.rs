//! Rectangular cell grid with 4-connected neighbourhood.

use crate::cell::CellState;
use crate::error::GridError;
use crate::position::{Direction, Position};
use smallvec::SmallVec;
use std::fmt;

/// A rectangular, row-major matrix of [`CellState`].
///
/// Each cell has position `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Neighbours are the four cardinal directions; cells
/// on the boundary have fewer (corners have 2, edges have 3). Dimensions
/// are fixed at construction.
///
/// # Examples
///
/// ```
/// use warren_core::{CellState, Grid, Position};
///
/// let grid = Grid::new(5, 5, CellState::Wall).unwrap();
/// assert_eq!(grid.cell_count(), 25);
/// assert_eq!(grid.neighbours(Position::new(0, 0)).len(), 2);
/// assert_eq!(grid.neighbours(Position::new(2, 2)).len(), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a `rows x cols` grid with every cell set to `fill`.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0.
    pub fn new(rows: usize, cols: usize, fill: CellState) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![fill; rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Result<usize, GridError> {
        if self.contains(pos) {
            Ok(pos.row * self.cols + pos.col)
        } else {
            Err(GridError::OutOfBounds {
                pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// The state at `pos`, or `None` if out of bounds.
    pub fn get(&self, pos: Position) -> Option<CellState> {
        self.index(pos).ok().map(|i| self.cells[i])
    }

    /// Overwrite the state at `pos`.
    pub fn set(&mut self, pos: Position, state: CellState) -> Result<(), GridError> {
        let i = self.index(pos)?;
        self.cells[i] = state;
        Ok(())
    }

    /// Returns `true` if `pos` is in bounds and open (`Passage` or `Exit`).
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(CellState::is_open)
    }

    /// In-bounds 4-connected neighbours of `pos`, in [`Direction::ALL`] order.
    pub fn neighbours(&self, pos: Position) -> SmallVec<[Position; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| pos.step(dir))
            .filter(|&nb| self.contains(nb))
            .collect()
    }

    /// Returns `true` if `pos` is on the outermost ring of the grid.
    pub fn is_boundary(&self, pos: Position) -> bool {
        self.contains(pos)
            && (pos.row == 0 || pos.col == 0 || pos.row == self.rows - 1 || pos.col == self.cols - 1)
    }

    /// Returns `true` if `pos` is one of the four corner cells.
    pub fn is_corner(&self, pos: Position) -> bool {
        self.contains(pos)
            && (pos.row == 0 || pos.row == self.rows - 1)
            && (pos.col == 0 || pos.col == self.cols - 1)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols;
        (0..self.cells.len()).map(move |i| Position::new(i / cols, i % cols))
    }

    /// All `(position, state)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Positions of every `Exit` cell, in row-major order.
    pub fn exits(&self) -> Vec<Position> {
        self.iter()
            .filter(|&(_, s)| s == CellState::Exit)
            .map(|(p, _)| p)
            .collect()
    }

    /// Number of cells whose state satisfies `pred`.
    pub fn count(&self, pred: impl Fn(CellState) -> bool) -> usize {
        self.cells.iter().filter(|&&s| pred(s)).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
        }
        Ok(())
    }
}
