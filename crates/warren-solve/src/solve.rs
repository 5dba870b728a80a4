//! End-to-end solving: encirclement check, labeling, reconstruction.

use crate::encircle::is_encircled;
use crate::error::SolveError;
use crate::metrics::SolveMetrics;
use crate::reconstruct::reconstruct;
use crate::wavefront::label_distances_until;
use warren_core::{Maze, Path};

/// Outcome of [`solve_detailed`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Shortest path from the first exit to the second, or `None` if the
    /// exits are not connected.
    pub path: Option<Path>,
    /// Work done to reach the answer.
    pub metrics: SolveMetrics,
}

/// Solve `maze`, returning the shortest path between its exits.
///
/// The path runs from `maze.exits()[0]` to `maze.exits()[1]`. Returns
/// `Ok(None)` when either exit is encircled or the exits lie in
/// disconnected regions.
///
/// # Errors
///
/// Only internal invariant violations surface as errors
/// ([`SolveError::ReconstructionInconsistency`]).
pub fn solve(maze: &Maze) -> Result<Option<Path>, SolveError> {
    Ok(solve_detailed(maze)?.path)
}

/// Like [`solve`], but also reports [`SolveMetrics`].
///
/// Both exits are checked for encirclement before any labeling, so an
/// obviously unsolvable maze costs no wave-front rounds.
pub fn solve_detailed(maze: &Maze) -> Result<Solution, SolveError> {
    let [source, target] = maze.exits();

    if let Some(exit) = [source, target].into_iter().find(|&e| is_encircled(maze, e)) {
        log::debug!("exit {exit} is encircled; skipping wave-front");
        return Ok(Solution {
            path: None,
            metrics: SolveMetrics {
                encircled: Some(exit),
                ..SolveMetrics::default()
            },
        });
    }

    let distances = label_distances_until(maze, source, target)?;
    let metrics = SolveMetrics {
        encircled: None,
        wavefront_rounds: distances.rounds(),
        cells_labeled: distances.labeled(),
    };

    let path = match reconstruct(&distances, source, target) {
        Ok(path) => Some(path),
        Err(SolveError::NotFound { .. }) => {
            log::debug!("no path from {source} to {target}");
            None
        }
        Err(e) => return Err(e),
    };

    Ok(Solution { path, metrics })
}
