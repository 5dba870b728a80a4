//! Core types for the Warren maze toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the data model shared by generation and solving: positions and
//! directions, the tagged [`CellState`], the rectangular [`Grid`]
//! container, the validated [`Maze`] and [`Path`] types, and the
//! error enums for each of them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod maze;
pub mod path;
pub mod position;

pub use cell::CellState;
pub use error::{GridError, MazeError, PathError};
pub use grid::Grid;
pub use maze::Maze;
pub use path::Path;
pub use position::{Direction, Position};
