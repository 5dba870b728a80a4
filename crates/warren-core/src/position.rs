//! Grid positions and cardinal directions.

use std::fmt;

/// A cell position `(row, col)`, 0-indexed from the top-left corner.
///
/// Positions carry no bounds of their own; [`Grid::contains`](crate::Grid::contains)
/// decides whether a position lies inside a particular grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index (grows downwards).
    pub row: usize,
    /// Column index (grows rightwards).
    pub col: usize,
}

impl Position {
    /// Create a position from a row and a column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position one step away in `dir`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant
    /// (north of row 0 or west of column 0). Stepping south or east never
    /// fails here; the caller checks the upper bounds against a grid.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self { row, col })
    }

    /// Returns `true` if `other` is exactly one orthogonal step away.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }

    /// Manhattan (L1) distance between two positions.
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// One of the four cardinal directions of a 4-connected grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    North,
    /// Towards the last column.
    East,
    /// Towards the last row.
    South,
    /// Towards column 0.
    West,
}

impl Direction {
    /// All directions in the canonical neighbour order: N, E, S, W.
    ///
    /// Every neighbour enumeration in the workspace follows this order,
    /// which keeps tie-breaking during path reconstruction deterministic.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the `(row_offset, col_offset)` for this direction.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn step_from_origin_north_and_west_fail() {
        let origin = Position::new(0, 0);
        assert_eq!(origin.step(Direction::North), None);
        assert_eq!(origin.step(Direction::West), None);
        assert_eq!(origin.step(Direction::South), Some(Position::new(1, 0)));
        assert_eq!(origin.step(Direction::East), Some(Position::new(0, 1)));
    }

    #[test]
    fn adjacency_is_orthogonal_only() {
        let p = Position::new(2, 2);
        assert!(p.is_adjacent(Position::new(1, 2)));
        assert!(p.is_adjacent(Position::new(2, 3)));
        assert!(!p.is_adjacent(Position::new(3, 3)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn display_is_row_col_pair() {
        assert_eq!(Position::new(3, 7).to_string(), "(3, 7)");
    }

    proptest! {
        #[test]
        fn step_then_opposite_returns_home(r in 1usize..100, c in 1usize..100, i in 0usize..4) {
            let dir = Direction::ALL[i];
            let p = Position::new(r, c);
            let there = p.step(dir).unwrap();
            prop_assert!(p.is_adjacent(there));
            prop_assert_eq!(there.step(dir.opposite()), Some(p));
        }
    }
}
