//! Path reconstruction from distance labels.

use crate::error::SolveError;
use crate::wavefront::DistanceGrid;
use warren_core::{Path, Position};

/// Rebuild the shortest path from `source` to `target`.
///
/// Starts at `target` and repeatedly steps to the first neighbour (in
/// [`Direction::ALL`](warren_core::Direction::ALL) order) whose label is
/// one less, until the cell labeled 1 is reached. The walk takes exactly
/// `distance(target) - 1` steps or fails; it cannot loop.
///
/// The returned path runs from `source` to `target`.
///
/// # Errors
///
/// - [`SolveError::NotFound`] if `target` is unlabeled.
/// - [`SolveError::ReconstructionInconsistency`] if some labeled cell has
///   no predecessor, or the cell labeled 1 is not `source`.
pub fn reconstruct(
    distances: &DistanceGrid,
    source: Position,
    target: Position,
) -> Result<Path, SolveError> {
    let mut distance = distances
        .distance(target)
        .ok_or(SolveError::NotFound { target })?;

    let mut current = target;
    let mut walk = Vec::with_capacity(distance as usize);
    walk.push(current);

    while distance > 1 {
        let want = distance - 1;
        let prev = distances
            .grid()
            .neighbours(current)
            .into_iter()
            .find(|&nb| distances.distance(nb) == Some(want))
            .ok_or(SolveError::ReconstructionInconsistency {
                at: current,
                distance,
            })?;
        walk.push(prev);
        current = prev;
        distance = want;
    }

    if current != source {
        return Err(SolveError::ReconstructionInconsistency {
            at: current,
            distance,
        });
    }

    walk.reverse();
    Ok(Path::new(walk)?)
}
