//! Exit placement on the maze boundary.

use rand::Rng;
use warren_core::Position;

/// How the generator chooses the two exit cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ExitPlacement {
    /// Two distinct boundary slots chosen uniformly at random.
    #[default]
    Random,
    /// `(0, cols - 2)` on the top edge and `(rows - 1, 1)` on the bottom
    /// edge.
    Fixed,
}

/// Candidate exit cells for a `rows x cols` maze with odd dimensions.
///
/// A slot is a boundary cell at an odd offset along its side, so it is
/// never a corner and always faces a node cell one step inwards. Order:
/// top/bottom pairs from left to right, then left/right pairs from top
/// to bottom.
pub fn boundary_slots(rows: usize, cols: usize) -> Vec<Position> {
    let mut slots = Vec::with_capacity(rows + cols);
    for c in (1..cols - 1).step_by(2) {
        slots.push(Position::new(0, c));
        slots.push(Position::new(rows - 1, c));
    }
    for r in (1..rows - 1).step_by(2) {
        slots.push(Position::new(r, 0));
        slots.push(Position::new(r, cols - 1));
    }
    slots
}

/// Choose the two exits for a `rows x cols` maze.
///
/// With [`ExitPlacement::Random`], the second exit is drawn from the slots
/// that remain after the first, so the two never coincide.
pub(crate) fn place_exits<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    placement: ExitPlacement,
    rng: &mut R,
) -> [Position; 2] {
    match placement {
        ExitPlacement::Fixed => [Position::new(0, cols - 2), Position::new(rows - 1, 1)],
        ExitPlacement::Random => {
            let slots = boundary_slots(rows, cols);
            let first = rng.random_range(0..slots.len());
            let mut second = rng.random_range(0..slots.len() - 1);
            if second >= first {
                second += 1;
            }
            [slots[first], slots[second]]
        }
    }
}
