//! Per-run counters for the benchmark driver.
//!
//! [`RunMetrics`] captures what happened during one run, independently of
//! how diagnostics were routed.

/// Counters collected during a single run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Number of hook invocations.
    pub hook_calls: u64,
    /// Number of `anti_op` negations performed by the hook.
    pub negations: u64,
    /// Number of `nondet_int` draws made by the hook.
    pub nondet_draws: u64,
    /// Number of failed hook assertions.
    pub assertion_failures: u64,
    /// Number of failed driver-side checks.
    pub internal_check_failures: u64,
}

impl RunMetrics {
    /// Total failed checks of either kind.
    pub fn total_failures(&self) -> u64 {
        self.assertion_failures + self.internal_check_failures
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.hook_calls, 0);
        assert_eq!(m.negations, 0);
        assert_eq!(m.nondet_draws, 0);
        assert_eq!(m.assertion_failures, 0);
        assert_eq!(m.internal_check_failures, 0);
        assert_eq!(m.total_failures(), 0);
    }

    #[test]
    fn total_failures_sums_both_kinds() {
        let m = RunMetrics {
            assertion_failures: 3,
            internal_check_failures: 1,
            ..RunMetrics::default()
        };
        assert_eq!(m.total_failures(), 4);
    }
}
