//! Per-build metrics for the generate-and-solve loop.
//!
//! [`BuildMetrics`] records how many attempts a build took, why rejected
//! attempts were rejected, and whether the fallback layout was used.

/// Counters and timing collected during a single build.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildMetrics {
    /// Generate-and-solve attempts made (0 when `max_attempts` is 0).
    pub attempts: u32,
    /// Attempts rejected because an exit was encircled.
    pub encircled_rejections: u32,
    /// Attempts rejected because the exits were not connected.
    pub unsolved_rejections: u32,
    /// Wave-front rounds summed over all attempts and the fallback.
    pub wavefront_rounds: u64,
    /// Whether the result is the fallback corridor.
    pub used_fallback: bool,
    /// Wall-clock time for the whole build, in microseconds.
    pub total_us: u64,
}
