//! Perfect maze generation for the Warren maze toolkit.
//!
//! [`MazeGenerator`] carves a binary-tree spanning tree over the odd-indexed
//! node cells of a walled grid and then places two boundary exits
//! according to an [`ExitPlacement`] policy.
//!
//! All randomness is injected: [`generate`] takes any `Rng`, and
//! [`generate_seeded`] drives a `ChaCha8Rng` from a `u64` seed so that
//! identical seeds produce identical mazes.
//!
//! ```
//! use warren_gen::{generate_seeded, ExitPlacement};
//!
//! let a = generate_seeded(15, 15, ExitPlacement::Random, 7).unwrap();
//! let b = generate_seeded(15, 15, ExitPlacement::Random, 7).unwrap();
//! assert_eq!(a, b);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod exits;
pub mod generator;

pub use exits::{boundary_slots, ExitPlacement};
pub use generator::{generate, generate_seeded, MazeGenerator};
