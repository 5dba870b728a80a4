//! The bounded generate-and-solve loop.
//!
//! [`MazeBuilder`] owns a validated [`BuildConfig`] and a
//! [`MazeGenerator`]. Each [`build_with_rng()`](MazeBuilder::build_with_rng)
//! call generates up to `max_attempts` mazes, solving each from the first
//! exit to the second, and returns the first one with a path. Encircled
//! and disconnected attempts are counted in [`BuildMetrics`] and retried.
//! When attempts run out the builder returns [`fallback_corridor`], or
//! [`BuildError::Unsolvable`] if the fallback is disabled.

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use warren_core::{Maze, MazeError, Path};
use warren_gen::MazeGenerator;
use warren_solve::solve_detailed;

use crate::config::{BuildConfig, ConfigError};
use crate::error::BuildError;
use crate::fallback::fallback_corridor;
use crate::metrics::BuildMetrics;

// ── BuiltMaze ──────────────────────────────────────────────────────

/// Result of a successful build.
#[derive(Clone, Debug)]
pub struct BuiltMaze {
    /// The solvable maze.
    pub maze: Maze,
    /// Shortest path from `maze.exits()[0]` to `maze.exits()[1]`.
    pub path: Path,
    /// Attempt counters and timing for this build.
    pub metrics: BuildMetrics,
}

// ── MazeBuilder ────────────────────────────────────────────────────

/// Builds solvable mazes from a [`BuildConfig`].
///
/// # Example
///
/// ```
/// use warren_engine::{BuildConfig, MazeBuilder};
///
/// let builder = MazeBuilder::new(BuildConfig {
///     rows: 11,
///     cols: 21,
///     seed: 7,
///     ..BuildConfig::default()
/// })
/// .unwrap();
/// let built = builder.build().unwrap();
/// assert_eq!(built.path.first(), built.maze.exits()[0]);
/// assert_eq!(built.path.last(), built.maze.exits()[1]);
/// ```
#[derive(Clone, Debug)]
pub struct MazeBuilder {
    config: BuildConfig,
    rows: usize,
    cols: usize,
    generator: MazeGenerator,
}

impl MazeBuilder {
    /// Validate `config` and create a builder for it.
    pub fn new(config: BuildConfig) -> Result<Self, ConfigError> {
        let (rows, cols) = config.validate()?;
        let generator = MazeGenerator::new(rows, cols)?.exit_placement(config.exit_placement);
        Ok(Self {
            config,
            rows,
            cols,
            generator,
        })
    }

    /// The configuration this builder was created from.
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Normalized `(rows, cols)` of every maze this builder produces.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Build with a [`ChaCha8Rng`] seeded from [`BuildConfig::seed`].
    ///
    /// The same config always yields the same maze and path.
    pub fn build(&self) -> Result<BuiltMaze, BuildError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.build_with_rng(&mut rng)
    }

    /// Build, drawing all randomness from `rng`.
    pub fn build_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<BuiltMaze, BuildError> {
        self.build_from_source(|_| self.generator.generate(&mut *rng))
    }

    /// Run the attempt loop over mazes produced by `source`.
    ///
    /// `source` receives the 1-based attempt number. Errors from it
    /// abort the build, as do [`SolveError`](warren_solve::SolveError)s
    /// from the solver; only "no path" outcomes are retried.
    pub fn build_from_source<F>(&self, mut source: F) -> Result<BuiltMaze, BuildError>
    where
        F: FnMut(u32) -> Result<Maze, MazeError>,
    {
        let start = Instant::now();
        let mut metrics = BuildMetrics::default();

        for attempt in 1..=self.config.max_attempts {
            metrics.attempts = attempt;
            let maze = source(attempt)?;
            let solution = solve_detailed(&maze)?;
            metrics.wavefront_rounds += u64::from(solution.metrics.wavefront_rounds);

            match solution.path {
                Some(path) if path.len() > 1 => {
                    log::debug!(
                        "attempt {attempt}: solved, path length {}",
                        path.len()
                    );
                    metrics.total_us = start.elapsed().as_micros() as u64;
                    return Ok(BuiltMaze {
                        maze,
                        path,
                        metrics,
                    });
                }
                _ => match solution.metrics.encircled {
                    Some(exit) => {
                        metrics.encircled_rejections += 1;
                        log::debug!("attempt {attempt}: exit {exit} is encircled");
                    }
                    None => {
                        metrics.unsolved_rejections += 1;
                        log::debug!("attempt {attempt}: exits are not connected");
                    }
                },
            }
        }

        if !self.config.fallback {
            log::warn!(
                "no solvable maze after {} attempts, fallback disabled",
                metrics.attempts
            );
            return Err(BuildError::Unsolvable {
                attempts: metrics.attempts,
            });
        }

        log::warn!(
            "no solvable maze after {} attempts, using fallback corridor",
            metrics.attempts
        );
        let maze = fallback_corridor(self.rows, self.cols)?;
        let solution = solve_detailed(&maze)?;
        metrics.wavefront_rounds += u64::from(solution.metrics.wavefront_rounds);
        let path = solution.path.ok_or(BuildError::Unsolvable {
            attempts: metrics.attempts,
        })?;
        metrics.used_fallback = true;
        metrics.total_us = start.elapsed().as_micros() as u64;
        Ok(BuiltMaze {
            maze,
            path,
            metrics,
        })
    }
}

/// Build a solvable `rows x cols` maze in at most `max_attempts` tries.
///
/// Uses random exit placement and falls back to [`fallback_corridor`]
/// when every attempt fails, so for valid dimensions this only errors
/// on internal invariant violations.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use warren_engine::{build_solvable_maze, fallback_corridor};
///
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let maze = build_solvable_maze(9, 9, 0, &mut rng).unwrap();
/// assert_eq!(maze, fallback_corridor(9, 9).unwrap());
/// ```
pub fn build_solvable_maze<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Maze, BuildError> {
    let builder = MazeBuilder::new(BuildConfig {
        rows,
        cols,
        max_attempts,
        ..BuildConfig::default()
    })?;
    Ok(builder.build_with_rng(rng)?.maze)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use warren_core::Position;
    use warren_gen::ExitPlacement;
    use warren_test_utils::{
        adjacent_exits, assert_valid_solution, corner_exit_encircled, corridor_5x5, is_perfect,
        walled_off_exit,
    };

    fn config_5x5(max_attempts: u32) -> BuildConfig {
        BuildConfig {
            rows: 5,
            cols: 5,
            max_attempts,
            ..BuildConfig::default()
        }
    }

    // ── Attempt loop ───────────────────────────────────────────────

    #[test]
    fn first_solvable_attempt_wins() {
        let builder = MazeBuilder::new(config_5x5(10)).unwrap();
        let built = builder.build_from_source(|_| Ok(corridor_5x5())).unwrap();
        assert_eq!(built.metrics.attempts, 1);
        assert!(!built.metrics.used_fallback);
        assert_eq!(built.path.len(), 5);
        assert_valid_solution(&built.maze, &built.path);
    }

    #[test]
    fn rejections_are_counted_by_reason() {
        let builder = MazeBuilder::new(config_5x5(10)).unwrap();
        let built = builder
            .build_from_source(|attempt| match attempt {
                1 | 2 => Ok(corner_exit_encircled()),
                3 => Ok(walled_off_exit()),
                _ => Ok(adjacent_exits()),
            })
            .unwrap();
        assert_eq!(built.metrics.attempts, 4);
        assert_eq!(built.metrics.encircled_rejections, 2);
        assert_eq!(built.metrics.unsolved_rejections, 1);
        assert_eq!(
            built.path.positions(),
            &[Position::new(0, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn exhausted_attempts_use_fallback() {
        let builder = MazeBuilder::new(config_5x5(3)).unwrap();
        let built = builder
            .build_from_source(|_| Ok(walled_off_exit()))
            .unwrap();
        assert_eq!(built.metrics.attempts, 3);
        assert_eq!(built.metrics.unsolved_rejections, 3);
        assert!(built.metrics.used_fallback);
        assert_eq!(built.maze, fallback_corridor(5, 5).unwrap());
        assert_valid_solution(&built.maze, &built.path);
    }

    #[test]
    fn zero_attempts_goes_straight_to_fallback() {
        let builder = MazeBuilder::new(config_5x5(0)).unwrap();
        let mut calls = 0;
        let built = builder
            .build_from_source(|_| {
                calls += 1;
                Ok(corridor_5x5())
            })
            .unwrap();
        assert_eq!(calls, 0);
        assert_eq!(built.metrics.attempts, 0);
        assert!(built.metrics.used_fallback);
    }

    #[test]
    fn fallback_disabled_reports_unsolvable() {
        let builder = MazeBuilder::new(BuildConfig {
            fallback: false,
            ..config_5x5(2)
        })
        .unwrap();
        let err = builder
            .build_from_source(|_| Ok(corner_exit_encircled()))
            .unwrap_err();
        assert_eq!(err, BuildError::Unsolvable { attempts: 2 });

        let none = MazeBuilder::new(BuildConfig {
            fallback: false,
            ..config_5x5(0)
        })
        .unwrap();
        assert_eq!(
            none.build().unwrap_err(),
            BuildError::Unsolvable { attempts: 0 }
        );
    }

    #[test]
    fn source_errors_abort_the_build() {
        let builder = MazeBuilder::new(config_5x5(5)).unwrap();
        let err = builder
            .build_from_source(|_| Err(MazeError::ExitCount { found: 1 }))
            .unwrap_err();
        assert_eq!(err, BuildError::Maze(MazeError::ExitCount { found: 1 }));
    }

    // ── Config ─────────────────────────────────────────────────────

    #[test]
    fn invalid_config_rejected() {
        let err = MazeBuilder::new(BuildConfig {
            cols: 2,
            ..BuildConfig::default()
        })
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Maze(MazeError::InvalidDimensions { .. })
        ));
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            build_solvable_maze(4, 9, 3, &mut rng),
            Err(BuildError::Config(_))
        ));
    }

    #[test]
    fn builder_exposes_normalized_dimensions() {
        let builder = MazeBuilder::new(BuildConfig {
            rows: 12,
            cols: 9,
            ..BuildConfig::default()
        })
        .unwrap();
        assert_eq!(builder.dimensions(), (11, 9));
        assert_eq!(builder.config().rows, 12);
    }

    // ── Seeded builds ──────────────────────────────────────────────

    #[test]
    fn seeded_build_is_reproducible() {
        let cfg = BuildConfig {
            rows: 21,
            cols: 31,
            seed: 99,
            ..BuildConfig::default()
        };
        let a = MazeBuilder::new(cfg.clone()).unwrap().build().unwrap();
        let b = MazeBuilder::new(cfg).unwrap().build().unwrap();
        assert_eq!(a.maze, b.maze);
        assert_eq!(a.path, b.path);
    }

    #[test]
    fn fixed_exits_build_first_try() {
        let built = MazeBuilder::new(BuildConfig {
            exit_placement: ExitPlacement::Fixed,
            ..BuildConfig::default()
        })
        .unwrap()
        .build()
        .unwrap();
        assert_eq!(built.metrics.attempts, 1);
        assert_eq!(
            built.maze.exits(),
            [Position::new(0, 13), Position::new(14, 1)]
        );
    }

    proptest! {
        #[test]
        fn generated_builds_never_fall_back(
            rows in 5usize..40,
            cols in 5usize..40,
            seed in any::<u64>(),
        ) {
            let built = MazeBuilder::new(BuildConfig { rows, cols, seed, ..BuildConfig::default() })
                .unwrap()
                .build()
                .unwrap();
            prop_assert_eq!(built.metrics.attempts, 1);
            prop_assert!(!built.metrics.used_fallback);
            prop_assert!(is_perfect(&built.maze));
            assert_valid_solution(&built.maze, &built.path);
        }
    }
}
