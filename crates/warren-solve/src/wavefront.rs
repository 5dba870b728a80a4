//! Breadth-first wave-front distance labeling.
//!
//! The source is labeled 1. Each round expands exactly the cells labeled
//! in the previous round (the *frontier*): every open, still unlabeled
//! neighbour receives `round distance + 1` and joins the *next* frontier.
//! Cells labeled during a round are never expanded in that same round, so
//! every label is the true shortest-path distance (plus one) regardless
//! of neighbour order.
//!
//! Labels are written into a private copy of the maze grid as
//! [`CellState::Distance`]. A labeled cell is no longer open, which is
//! what marks it visited.

use crate::error::SolveError;
use std::mem;
use warren_core::{CellState, Grid, Maze, Position};

/// Result of a wave-front pass: the maze grid with reachable open cells
/// replaced by their distance labels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceGrid {
    grid: Grid,
    source: Position,
    rounds: u32,
    labeled: usize,
}

impl DistanceGrid {
    pub(crate) fn from_parts(grid: Grid, source: Position, rounds: u32, labeled: usize) -> Self {
        Self {
            grid,
            source,
            rounds,
            labeled,
        }
    }

    /// Distance label at `pos` (source = 1), or `None` if unlabeled or out
    /// of bounds.
    pub fn distance(&self, pos: Position) -> Option<u32> {
        self.grid.get(pos).and_then(CellState::distance)
    }

    /// Returns `true` if `pos` received a label.
    pub fn is_labeled(&self, pos: Position) -> bool {
        self.distance(pos).is_some()
    }

    /// The position labeled 1.
    pub fn source(&self) -> Position {
        self.source
    }

    /// Number of expansion rounds executed.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Number of labeled cells, source included.
    pub fn labeled(&self) -> usize {
        self.labeled
    }

    /// The annotated grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consume the distance grid, returning the annotated grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// In-progress labeling state.
struct WaveFront {
    grid: Grid,
    source: Position,
    frontier: Vec<Position>,
    next: Vec<Position>,
    distance: u32,
    rounds: u32,
    labeled: usize,
}

impl WaveFront {
    fn new(maze: &Maze, source: Position) -> Result<Self, SolveError> {
        let mut grid = maze.grid().clone();
        if !grid.is_open(source) {
            return Err(SolveError::InvalidSource { pos: source });
        }
        grid.set(source, CellState::Distance(1))
            .map_err(|_| SolveError::InvalidSource { pos: source })?;
        Ok(Self {
            grid,
            source,
            frontier: vec![source],
            next: Vec::new(),
            distance: 1,
            rounds: 0,
            labeled: 1,
        })
    }

    /// Expand the current frontier by one step.
    fn expand(&mut self) {
        let label = CellState::Distance(self.distance + 1);
        let frontier = mem::take(&mut self.frontier);
        for &pos in &frontier {
            for nb in self.grid.neighbours(pos) {
                if self.grid.is_open(nb) {
                    // `nb` came from `neighbours`, so it is in bounds.
                    let _ = self.grid.set(nb, label);
                    self.next.push(nb);
                }
            }
        }
        self.labeled += self.next.len();
        self.frontier = mem::replace(&mut self.next, frontier);
        self.next.clear();
        self.distance += 1;
        self.rounds += 1;
    }

    fn run(mut self, target: Option<Position>) -> DistanceGrid {
        while !self.frontier.is_empty() {
            if target.is_some_and(|t| self.grid.get(t).and_then(CellState::distance).is_some()) {
                break;
            }
            self.expand();
        }
        log::trace!(
            "wave-front from {}: {} rounds, {} cells labeled",
            self.source,
            self.rounds,
            self.labeled
        );
        DistanceGrid::from_parts(self.grid, self.source, self.rounds, self.labeled)
    }
}

/// Label every open cell reachable from `source` with its distance.
///
/// # Errors
///
/// Returns [`SolveError::InvalidSource`] if `source` is out of bounds or
/// not open.
pub fn label_distances(maze: &Maze, source: Position) -> Result<DistanceGrid, SolveError> {
    Ok(WaveFront::new(maze, source)?.run(None))
}

/// Like [`label_distances`], but stops as soon as `target` is labeled.
///
/// Labels of cells closer than `target` are final; cells farther away
/// may be unlabeled.
pub fn label_distances_until(
    maze: &Maze,
    source: Position,
    target: Position,
) -> Result<DistanceGrid, SolveError> {
    Ok(WaveFront::new(maze, source)?.run(Some(target)))
}
