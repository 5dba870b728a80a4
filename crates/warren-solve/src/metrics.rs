//! Per-solve counters.

use warren_core::Position;

/// Work done by a single [`solve_detailed`](crate::solve_detailed) call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SolveMetrics {
    /// The exit that short-circuited the solve, if one was encircled.
    /// When set, no wave-front pass ran.
    pub encircled: Option<Position>,
    /// Wave-front expansion rounds executed.
    pub wavefront_rounds: u32,
    /// Cells that received a distance label, source included.
    pub cells_labeled: usize,
}
