//! Execution context lent to a hook for one iteration.
//!
//! [`HookContext`] is the whole collaborator surface a hook sees: the
//! accumulator, the `anti_op` negation, the `nondet_int` coin, and the
//! `check` assertion. Everything is borrowed from the driver, so no
//! state outlives the call.

use crate::accumulator::Accumulator;
use crate::coin::CoinSource;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::id::Iteration;

/// Per-run tallies of hook activity, updated through [`HookContext`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HookCounters {
    /// Number of [`HookContext::anti_op`] calls.
    pub negations: u64,
    /// Number of [`HookContext::nondet_int`] draws.
    pub nondet_draws: u64,
    /// Number of failed [`HookContext::check`] calls.
    pub assertion_failures: u64,
}

/// Execution context passed to [`Hook::call`](crate::Hook::call).
///
/// Uses dynamic dispatch (`&mut dyn CoinSource`, `&mut dyn DiagnosticSink`)
/// so the [`Hook`](crate::Hook) trait stays object-safe and hooks can be
/// exercised against mock collaborators.
pub struct HookContext<'a> {
    accumulator: &'a mut Accumulator,
    coin: &'a mut dyn CoinSource,
    sink: &'a mut dyn DiagnosticSink,
    counters: &'a mut HookCounters,
    hook_name: &'a str,
    iteration: Iteration,
}

impl<'a> HookContext<'a> {
    /// Construct a new hook context.
    ///
    /// Typically called by the driver, not by hooks directly. For testing,
    /// construct with mock coins and sinks from `artbench-test-utils`.
    pub fn new(
        accumulator: &'a mut Accumulator,
        coin: &'a mut dyn CoinSource,
        sink: &'a mut dyn DiagnosticSink,
        counters: &'a mut HookCounters,
        hook_name: &'a str,
        iteration: Iteration,
    ) -> Self {
        Self {
            accumulator,
            coin,
            sink,
            counters,
            hook_name,
            iteration,
        }
    }

    /// Index of the current iteration.
    pub fn iteration(&self) -> Iteration {
        self.iteration
    }

    /// Current accumulator value.
    pub fn sum(&self) -> i64 {
        self.accumulator.value()
    }

    /// Unrestricted write access to the accumulator.
    ///
    /// Writes through this handle are not counted as negations.
    pub fn accumulator_mut(&mut self) -> &mut Accumulator {
        self.accumulator
    }

    /// Negate the accumulator.
    pub fn anti_op(&mut self) {
        self.accumulator.negate();
        self.counters.negations += 1;
    }

    /// Draw `0` or `1` from the injected coin.
    pub fn nondet_int(&mut self) -> i32 {
        self.counters.nondet_draws += 1;
        i32::from(self.coin.flip())
    }

    /// Assert `cond`. A false condition is reported to the sink and
    /// counted; control flow is unaffected either way.
    ///
    /// Returns `cond` so callers can branch on it if they choose.
    pub fn check(&mut self, cond: bool, message: &str) -> bool {
        if !cond {
            self.counters.assertion_failures += 1;
            self.sink.report(Diagnostic::AssertionFailed {
                iteration: self.iteration,
                hook: self.hook_name.to_string(),
                message: message.to_string(),
            });
        }
        cond
    }

    /// Tallies accumulated so far in this run.
    pub fn counters(&self) -> &HookCounters {
        self.counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysOne;

    impl CoinSource for AlwaysOne {
        fn flip(&mut self) -> bool {
            true
        }
    }

    #[derive(Default)]
    struct Collect(Vec<Diagnostic>);

    impl DiagnosticSink for Collect {
        fn report(&mut self, diagnostic: Diagnostic) {
            self.0.push(diagnostic);
        }
    }

    #[test]
    fn anti_op_negates_and_counts() {
        let mut acc = Accumulator::new(5);
        let mut coin = AlwaysOne;
        let mut sink = Collect::default();
        let mut counters = HookCounters::default();
        let mut ctx = HookContext::new(
            &mut acc,
            &mut coin,
            &mut sink,
            &mut counters,
            "t",
            Iteration(0),
        );
        ctx.anti_op();
        assert_eq!(ctx.sum(), -5);
        assert_eq!(ctx.counters().negations, 1);
    }

    #[test]
    fn nondet_int_maps_flip_to_one() {
        let mut acc = Accumulator::ZERO;
        let mut coin = AlwaysOne;
        let mut sink = Collect::default();
        let mut counters = HookCounters::default();
        let mut ctx = HookContext::new(
            &mut acc,
            &mut coin,
            &mut sink,
            &mut counters,
            "t",
            Iteration(0),
        );
        assert_eq!(ctx.nondet_int(), 1);
        assert_eq!(ctx.nondet_int(), 1);
        assert_eq!(counters.nondet_draws, 2);
    }

    #[test]
    fn failed_check_reports_and_continues() {
        let mut acc = Accumulator::ZERO;
        let mut coin = AlwaysOne;
        let mut sink = Collect::default();
        let mut counters = HookCounters::default();
        {
            let mut ctx = HookContext::new(
                &mut acc,
                &mut coin,
                &mut sink,
                &mut counters,
                "monitor",
                Iteration(7),
            );
            assert!(ctx.check(true, "fine"));
            assert!(!ctx.check(false, "broken"));
            ctx.accumulator_mut().set(11);
        }
        assert_eq!(acc.value(), 11);
        assert_eq!(counters.assertion_failures, 1);
        assert_eq!(
            sink.0,
            vec![Diagnostic::AssertionFailed {
                iteration: Iteration(7),
                hook: "monitor".to_string(),
                message: "broken".to_string(),
            }]
        );
    }
}
