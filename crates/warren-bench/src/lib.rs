//! Benchmark profiles and utilities for the Warren maze crates.
//!
//! Provides pre-built [`BuildConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 101x101 grid (~10K cells, 2.5K tree nodes)
//! - [`stress_profile`]: 1001x1001 grid (~1M cells, 250K tree nodes)
//! - [`seeded_mazes`]: a deterministic batch of generated mazes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use warren_core::{Maze, MazeError};
use warren_engine::BuildConfig;
use warren_gen::{ExitPlacement, MazeGenerator};

/// Build a reference benchmark profile: 101x101 grid.
pub fn reference_profile(seed: u64) -> BuildConfig {
    BuildConfig {
        rows: 101,
        cols: 101,
        seed,
        ..BuildConfig::default()
    }
}

/// Build a stress benchmark profile: 1001x1001 grid.
///
/// Same policy as [`reference_profile`] at 100x the cell count.
pub fn stress_profile(seed: u64) -> BuildConfig {
    BuildConfig {
        rows: 1001,
        cols: 1001,
        seed,
        ..BuildConfig::default()
    }
}

/// Generate `count` mazes of the given size with seeds `seed..seed + count`.
///
/// Deterministic: the same arguments always produce the same batch.
pub fn seeded_mazes(
    rows: usize,
    cols: usize,
    count: usize,
    seed: u64,
) -> Result<Vec<Maze>, MazeError> {
    let generator = MazeGenerator::new(rows, cols)?.exit_placement(ExitPlacement::Random);
    (0..count as u64)
        .map(|i| generator.generate_seeded(seed.wrapping_add(i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        assert_eq!(reference_profile(0).validate(), Ok((101, 101)));
        assert_eq!(stress_profile(0).validate(), Ok((1001, 1001)));
    }

    #[test]
    fn seeded_batch_is_deterministic() {
        let a = seeded_mazes(11, 11, 4, 7).unwrap();
        let b = seeded_mazes(11, 11, 4, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 4);
    }
}
