//! Encircled-exit detection.

use warren_core::{Maze, Position};

/// Returns `true` if `exit` has no open in-bounds neighbour.
///
/// An encircled exit cannot be entered from the maze interior, so any
/// search starting or ending there is pointless. Out-of-bounds neighbours
/// of boundary cells are ignored; an exit outside the grid has no
/// neighbours at all and is reported as encircled.
pub fn is_encircled(maze: &Maze, exit: Position) -> bool {
    let grid = maze.grid();
    !grid.neighbours(exit).into_iter().any(|nb| grid.is_open(nb))
}
