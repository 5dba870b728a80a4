//! Ordered walks between two exits.

use crate::error::PathError;
use crate::position::Position;
use std::collections::HashSet;
use std::ops::Index;

/// A validated walk through a grid.
///
/// Invariants, checked by [`Path::new`]:
/// - at least one position,
/// - every consecutive pair is orthogonally adjacent,
/// - no position appears twice.
///
/// Paths produced by the solver run from the wave-front source exit
/// (first) to the target exit (last).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    positions: Vec<Position>,
}

impl Path {
    /// Validate `positions` and wrap them as a path.
    pub fn new(positions: Vec<Position>) -> Result<Self, PathError> {
        if positions.is_empty() {
            return Err(PathError::Empty);
        }
        for (index, pair) in positions.windows(2).enumerate() {
            if !pair[0].is_adjacent(pair[1]) {
                return Err(PathError::NotAdjacent {
                    index,
                    from: pair[0],
                    to: pair[1],
                });
            }
        }
        let mut seen = HashSet::with_capacity(positions.len());
        for &pos in &positions {
            if !seen.insert(pos) {
                return Err(PathError::Repeated { pos });
            }
        }
        Ok(Self { positions })
    }

    /// Number of positions, endpoints included.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false`; construction rejects empty paths.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First position (the source exit for solver output).
    pub fn first(&self) -> Position {
        self.positions[0]
    }

    /// Last position (the target exit for solver output).
    pub fn last(&self) -> Position {
        self.positions[self.positions.len() - 1]
    }

    /// Number of steps taken, i.e. `len() - 1`.
    pub fn steps(&self) -> usize {
        self.positions.len() - 1
    }

    /// The positions as a slice.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Iterate over the positions in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.positions.iter()
    }

    /// Returns `true` if `pos` lies on the path.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    /// The same walk in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut positions = self.positions.clone();
        positions.reverse();
        Self { positions }
    }

    /// Consume the path, returning the positions.
    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }
}

impl Index<usize> for Path {
    type Output = Position;

    fn index(&self, index: usize) -> &Position {
        &self.positions[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}
