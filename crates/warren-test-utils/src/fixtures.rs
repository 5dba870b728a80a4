//! Reusable grid and maze fixtures.
//!
//! Layouts are written as ASCII rows using the same glyphs as the grid's
//! `Display` impl: `#` wall, space passage, `X` exit.
//!
//! - [`corridor_5x5`] — straight corridor between opposite exits.
//! - [`adjacent_exits`] — two exits side by side on the top edge.
//! - [`corner_exit_encircled`] — one exit in a corner with only walls around it.
//! - [`walled_off_exit`] — two open exits in disconnected regions.
//! - [`two_route_loop`] — a loop offering a short and a long route.

use warren_core::{CellState, Grid, Maze};

/// Parse an ASCII layout into a grid.
///
/// # Panics
///
/// Panics on ragged rows, an empty layout, or an unknown glyph.
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    let cols = rows.first().map_or(0, |r| r.chars().count());
    let mut grid = Grid::new(rows.len(), cols, CellState::Wall).expect("non-empty layout");
    for (r, line) in rows.iter().enumerate() {
        assert_eq!(line.chars().count(), cols, "row {r} is ragged");
        for (c, glyph) in line.chars().enumerate() {
            let state = match glyph {
                '#' => CellState::Wall,
                ' ' => CellState::Passage,
                'X' => CellState::Exit,
                other => panic!("unknown glyph {other:?} at ({r}, {c})"),
            };
            grid.set((r, c).into(), state).expect("in bounds");
        }
    }
    grid
}

/// Parse an ASCII layout into a validated maze.
///
/// # Panics
///
/// Panics if the layout is not a valid maze (see [`Maze::from_grid`]).
pub fn maze_from_ascii(rows: &[&str]) -> Maze {
    Maze::from_grid(grid_from_ascii(rows)).expect("fixture must be a valid maze")
}

pub fn corridor_5x5() -> Maze {
    maze_from_ascii(&[
        "#####", //
        "#####", //
        "X   X", //
        "#####", //
        "#####", //
    ])
}

pub fn adjacent_exits() -> Maze {
    maze_from_ascii(&[
        "#XX##", //
        "#####", //
        "#####", //
        "#####", //
        "#####", //
    ])
}

/// Exit at `(0, 0)` is encircled; exit at `(3, 4)` is not.
pub fn corner_exit_encircled() -> Maze {
    maze_from_ascii(&[
        "X####", //
        "#   #", //
        "# # #", //
        "#   X", //
        "#####", //
    ])
}

/// Exits at `(0, 1)` and `(4, 3)` each touch a passage, but the two
/// passages are separated by a solid wall row.
pub fn walled_off_exit() -> Maze {
    maze_from_ascii(&[
        "#X###", //
        "# # #", //
        "#####", //
        "# # #", //
        "###X#", //
    ])
}

/// Exits at `(1, 0)` and `(5, 1)`. The short route is the left column
/// (path length 6); the long route goes round the loop.
pub fn two_route_loop() -> Maze {
    maze_from_ascii(&[
        "#######", //
        "X     #", //
        "# ### #", //
        "# ### #", //
        "#     #", //
        "#X#####", //
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::Position;

    #[test]
    fn fixtures_parse_with_expected_exits() {
        assert_eq!(
            corridor_5x5().exits(),
            [Position::new(2, 0), Position::new(2, 4)]
        );
        assert_eq!(
            adjacent_exits().exits(),
            [Position::new(0, 1), Position::new(0, 2)]
        );
        assert_eq!(
            corner_exit_encircled().exits(),
            [Position::new(0, 0), Position::new(3, 4)]
        );
        assert_eq!(
            walled_off_exit().exits(),
            [Position::new(0, 1), Position::new(4, 3)]
        );
        assert_eq!(
            two_route_loop().exits(),
            [Position::new(1, 0), Position::new(5, 1)]
        );
    }

    #[test]
    fn ascii_roundtrips_through_display() {
        let rows = ["#X###", "# # #", "#####"];
        assert_eq!(grid_from_ascii(&rows).to_string(), rows.join("\n"));
    }

    #[test]
    #[should_panic(expected = "unknown glyph")]
    fn unknown_glyph_panics() {
        grid_from_ascii(&["#?#"]);
    }
}
