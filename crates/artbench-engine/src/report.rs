//! Run reports and optional per-iteration traces.

use std::fmt;
use std::time::Duration;

use artbench_core::Iteration;

use crate::metrics::RunMetrics;

/// Accumulator values observed around one iteration.
///
/// `after_add == after_hook + iteration`, with `after_hook` being
/// `before_hook` as left by the hook (possibly negated).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceStep {
    /// Iteration index.
    pub iteration: Iteration,
    /// Value before the hook ran.
    pub before_hook: i64,
    /// Value after the hook returned.
    pub after_hook: i64,
    /// Value after the driver added the index.
    pub after_add: i64,
}

/// Outcome of one [`Harness::run`](crate::Harness::run).
///
/// `Display` renders the one-line summary
/// `"<iterations> took <seconds>s (sum=<value>)"`, where `<seconds>` is the
/// elapsed time truncated to whole seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Configured iteration count.
    pub iterations: u64,
    /// Wall-clock time of the loop.
    pub elapsed: Duration,
    /// Final accumulator value.
    pub sum: i64,
    /// Counters for this run.
    pub metrics: RunMetrics,
    /// Per-iteration trace, if enabled in the config.
    pub trace: Option<Vec<TraceStep>>,
}

impl RunReport {
    /// Wall-clock time of the loop.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Final accumulator value.
    pub fn sum(&self) -> i64 {
        self.sum
    }

    /// Elapsed time in fractional seconds.
    pub fn elapsed_secs_f64(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// The `(elapsed, final_accumulator)` pair.
    pub fn into_pair(self) -> (Duration, i64) {
        (self.elapsed, self.sum)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} took {}s (sum={})",
            self.iterations,
            self.elapsed.as_secs(),
            self.sum
        )
    }
}
