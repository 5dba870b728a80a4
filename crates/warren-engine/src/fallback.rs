//! The guaranteed-solvable fallback layout.

use warren_core::{CellState, Grid, Maze, MazeError, Position};

/// A straight corridor across the middle row.
///
/// Row `rows / 2` is open from column 1 to `cols - 2`, with exits at
/// both ends of the row; every other cell is wall. Dimensions follow
/// [`Maze::normalize_dimensions`], so the only possible error is
/// [`MazeError::InvalidDimensions`].
///
/// ```
/// use warren_engine::fallback_corridor;
///
/// let maze = fallback_corridor(5, 7).unwrap();
/// assert_eq!(maze.grid().to_string().lines().nth(2), Some("X     X"));
/// ```
pub fn fallback_corridor(rows: usize, cols: usize) -> Result<Maze, MazeError> {
    let (rows, cols) = Maze::normalize_dimensions(rows, cols)?;
    let mid = rows / 2;
    let mut grid = Grid::new(rows, cols, CellState::Wall)?;
    for c in 1..cols - 1 {
        grid.set(Position::new(mid, c), CellState::Passage)?;
    }
    grid.set(Position::new(mid, 0), CellState::Exit)?;
    grid.set(Position::new(mid, cols - 1), CellState::Exit)?;
    Maze::from_grid(grid)
}
