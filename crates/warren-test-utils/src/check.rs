//! Structural checkers for mazes and solutions.

use std::collections::VecDeque;
use warren_core::{CellState, Grid, Maze, Path, Position};

/// Number of open cells reachable from `from` (inclusive) by 4-adjacent
/// steps through open cells. Returns 0 if `from` is not open.
pub fn reachable_open(grid: &Grid, from: Position) -> usize {
    if !grid.is_open(from) {
        return 0;
    }
    let mut visited = vec![false; grid.cell_count()];
    let idx = |p: Position| p.row * grid.cols() + p.col;
    let mut queue = VecDeque::new();
    visited[idx(from)] = true;
    queue.push_back(from);
    let mut count = 0;
    while let Some(pos) = queue.pop_front() {
        count += 1;
        for nb in grid.neighbours(pos) {
            if grid.is_open(nb) && !visited[idx(nb)] {
                visited[idx(nb)] = true;
                queue.push_back(nb);
            }
        }
    }
    count
}

/// Number of unordered pairs of 4-adjacent open cells.
pub fn open_edge_count(grid: &Grid) -> usize {
    grid.positions()
        .filter(|&p| grid.is_open(p))
        .map(|p| {
            let south = Position::new(p.row + 1, p.col);
            let east = Position::new(p.row, p.col + 1);
            usize::from(grid.is_open(south)) + usize::from(grid.is_open(east))
        })
        .sum()
}

/// Returns `true` if the open cells of `maze` form a spanning tree:
/// connected, and exactly one fewer adjacency than open cells.
pub fn is_perfect(maze: &Maze) -> bool {
    let grid = maze.grid();
    let open = grid.count(CellState::is_open);
    let Some(start) = grid.positions().find(|&p| grid.is_open(p)) else {
        return false;
    };
    reachable_open(grid, start) == open && open_edge_count(grid) + 1 == open
}

/// Number of walls the generator carved: interior passages that are not
/// node cells (node cells have both coordinates odd).
pub fn carved_wall_count(maze: &Maze) -> usize {
    maze.grid()
        .iter()
        .filter(|&(p, s)| s == CellState::Passage && !(p.row % 2 == 1 && p.col % 2 == 1))
        .count()
}

/// Assert that `path` is a valid solution of `maze`.
///
/// Checks that the endpoints are the two exits (in either order), every
/// interior cell is a `Passage`, and no step crosses a wall. Adjacency
/// and uniqueness are already guaranteed by [`Path`].
///
/// # Panics
///
/// Panics with a descriptive message on the first violation.
pub fn assert_valid_solution(maze: &Maze, path: &Path) {
    let [a, b] = maze.exits();
    let ends = (path.first(), path.last());
    assert!(
        ends == (a, b) || ends == (b, a),
        "path endpoints {:?} are not the exits {a} and {b}",
        ends
    );
    let positions = path.positions();
    for (i, &pos) in positions.iter().enumerate() {
        let state = maze.get(pos);
        if i == 0 || i == positions.len() - 1 {
            assert_eq!(state, Some(CellState::Exit), "endpoint {pos} is not an exit");
        } else {
            assert_eq!(
                state,
                Some(CellState::Passage),
                "interior path cell {pos} is not a passage"
            );
        }
    }
}
