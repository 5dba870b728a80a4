//! The tagged cell state stored in every grid slot.

/// State of a single grid cell.
///
/// Topology (`Wall`, `Passage`, `Exit`) and solver annotations
/// (`Distance`, `PathMarker`) share one enum so that a distance label can
/// never be mistaken for terrain. A [`Maze`](crate::Maze) only ever holds
/// topology states; annotations appear in solver output and in grids
/// produced by [`Maze::annotated`](crate::Maze::annotated).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    /// Solid, impassable cell.
    #[default]
    Wall,
    /// Open interior cell.
    Passage,
    /// Open boundary cell through which the maze is entered or left.
    Exit,
    /// Wave-front distance label (always `>= 1`; the source is 1).
    Distance(u32),
    /// Cell lying on a solved path.
    PathMarker,
}

impl CellState {
    /// Returns `true` for cells a walker may stand on: `Passage` and `Exit`.
    pub fn is_open(self) -> bool {
        matches!(self, CellState::Passage | CellState::Exit)
    }

    /// Returns `true` for maze topology states (`Wall`, `Passage`, `Exit`).
    pub fn is_topology(self) -> bool {
        matches!(self, CellState::Wall | CellState::Passage | CellState::Exit)
    }

    /// The distance label, if this cell carries one.
    pub fn distance(self) -> Option<u32> {
        match self {
            CellState::Distance(d) => Some(d),
            _ => None,
        }
    }

    /// Single-character glyph used by the grid's `Display` impl.
    ///
    /// Distance labels show their last decimal digit.
    pub fn glyph(self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Passage => ' ',
            CellState::Exit => 'X',
            CellState::PathMarker => '.',
            CellState::Distance(d) => char::from_digit(d % 10, 10).unwrap_or('?'),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_passage_and_exit_are_open() {
        assert!(CellState::Passage.is_open());
        assert!(CellState::Exit.is_open());
        assert!(!CellState::Wall.is_open());
        assert!(!CellState::Distance(3).is_open());
        assert!(!CellState::PathMarker.is_open());
    }

    #[test]
    fn annotations_are_not_topology() {
        assert!(CellState::Wall.is_topology());
        assert!(!CellState::Distance(1).is_topology());
        assert!(!CellState::PathMarker.is_topology());
    }

    #[test]
    fn distance_glyph_is_last_digit() {
        assert_eq!(CellState::Distance(7).glyph(), '7');
        assert_eq!(CellState::Distance(42).glyph(), '2');
        assert_eq!(CellState::Distance(7).distance(), Some(7));
        assert_eq!(CellState::Exit.distance(), None);
    }
}
