//! Test utilities for Warren development.
//!
//! Provides ASCII grid fixtures ([`grid_from_ascii`], [`maze_from_ascii`]
//! and a handful of named layouts) plus structural checkers for the
//! perfect-maze and valid-solution properties shared by the test suites
//! of the generator, solver and engine crates.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod check;
pub mod fixtures;

pub use check::{assert_valid_solution, carved_wall_count, is_perfect, open_edge_count, reachable_open};
pub use fixtures::{
    adjacent_exits, corner_exit_encircled, corridor_5x5, grid_from_ascii, maze_from_ascii,
    two_route_loop, walled_off_exit,
};
