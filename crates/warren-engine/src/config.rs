//! Build configuration, validation, and error types.
//!
//! [`BuildConfig`] is the input for [`MazeBuilder`](crate::MazeBuilder).
//! [`validate()`](BuildConfig::validate) checks every invariant up front
//! so the build loop itself only fails on internal errors.

use std::error::Error;
use std::fmt;

use warren_core::{Maze, MazeError};
use warren_gen::ExitPlacement;

/// Upper bound accepted for [`BuildConfig::max_attempts`].
pub const MAX_ATTEMPTS_CAP: u32 = 10_000;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BuildConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Dimensions rejected by the maze dimension policy.
    Maze(MazeError),
    /// `max_attempts` exceeds [`MAX_ATTEMPTS_CAP`].
    TooManyAttempts {
        /// The configured attempt limit.
        configured: u32,
        /// The largest accepted value.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Maze(e) => write!(f, "maze: {e}"),
            Self::TooManyAttempts { configured, max } => {
                write!(f, "max_attempts {configured} exceeds cap of {max}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for ConfigError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

// ── BuildConfig ────────────────────────────────────────────────────

/// Complete configuration for building a solvable maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Requested rows. Normalized by [`Maze::normalize_dimensions`]. Default: 15.
    pub rows: usize,
    /// Requested columns. Normalized like `rows`. Default: 15.
    pub cols: usize,
    /// Hard limit on generate-and-solve attempts. Zero goes straight to
    /// the fallback. Default: 10.
    pub max_attempts: u32,
    /// Exit policy for generated mazes. Default: random.
    pub exit_placement: ExitPlacement,
    /// Seed for [`MazeBuilder::build`](crate::MazeBuilder::build). Default: 0.
    pub seed: u64,
    /// Whether exhausted attempts fall back to the corridor layout
    /// instead of failing with `Unsolvable`. Default: `true`.
    pub fallback: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 15,
            max_attempts: 10,
            exit_placement: ExitPlacement::Random,
            seed: 0,
            fallback: true,
        }
    }
}

impl BuildConfig {
    /// Validate all invariants, returning the normalized `(rows, cols)`.
    pub fn validate(&self) -> Result<(usize, usize), ConfigError> {
        // 1. Dimensions follow the maze policy (reject < 5, round even down).
        let dims = Maze::normalize_dimensions(self.rows, self.cols)?;
        // 2. Attempts are a hard bound; keep it a sane one.
        if self.max_attempts > MAX_ATTEMPTS_CAP {
            return Err(ConfigError::TooManyAttempts {
                configured: self.max_attempts,
                max: MAX_ATTEMPTS_CAP,
            });
        }
        Ok(dims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(BuildConfig::default().validate(), Ok((15, 15)));
    }

    #[test]
    fn small_dimensions_rejected() {
        let cfg = BuildConfig {
            rows: 3,
            ..BuildConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Maze(MazeError::InvalidDimensions {
                rows: 3,
                cols: 15,
                min: 5
            }))
        );
    }

    #[test]
    fn even_dimensions_normalized() {
        let cfg = BuildConfig {
            rows: 20,
            cols: 6,
            ..BuildConfig::default()
        };
        assert_eq!(cfg.validate(), Ok((19, 5)));
    }

    #[test]
    fn attempt_cap_enforced() {
        let cfg = BuildConfig {
            max_attempts: MAX_ATTEMPTS_CAP + 1,
            ..BuildConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::TooManyAttempts {
                configured: MAX_ATTEMPTS_CAP + 1,
                max: MAX_ATTEMPTS_CAP
            })
        );
        let at_cap = BuildConfig {
            max_attempts: MAX_ATTEMPTS_CAP,
            ..BuildConfig::default()
        };
        assert!(at_cap.validate().is_ok());
    }

    #[test]
    fn error_display_and_source() {
        let e = ConfigError::from(MazeError::ExitCount { found: 0 });
        assert_eq!(e.to_string(), "maze: maze must have exactly 2 exits, found 0");
        assert!(e.source().is_some());
    }
}
