//! Two-state runtime-verification monitor.
//!
//! [`SimpleStateMonitor`] is the default workload of the `artbench`
//! binary. It is an automaton over the parity of its own negations
//! (`Even`/`Odd`) that also keeps a shadow copy of the accumulator, so
//! it can detect when the value it is handed differs from what the
//! driver's update rule predicts.
//!
//! Each call:
//!
//! 1. On iteration 0 the monitor resets and checks the accumulator is 0.
//!    Otherwise it checks the iteration follows the previous one and the
//!    accumulator equals `previous post-hook value + previous index`.
//! 2. Draws `nondet_int()`. On `1` it negates and toggles state.
//! 3. Checks the state matches the parity of its negation count.
//! 4. Remembers the post-hook value for the next prediction.

use artbench_core::{Hook, HookContext, Iteration};

/// Automaton state: parity of negations performed so far in this run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MonitorState {
    /// Even number of negations.
    #[default]
    Even,
    /// Odd number of negations.
    Odd,
}

impl MonitorState {
    fn toggled(self) -> Self {
        match self {
            Self::Even => Self::Odd,
            Self::Odd => Self::Even,
        }
    }

    fn for_count(negations: u64) -> Self {
        if negations % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }
}

/// Runtime monitor driven by the coin. See the [module docs](self).
#[derive(Clone, Debug, Default)]
pub struct SimpleStateMonitor {
    state: MonitorState,
    negations: u64,
    last: Option<(i64, Iteration)>,
}

impl SimpleStateMonitor {
    /// A monitor in its initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current automaton state.
    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Negations performed since the last reset.
    pub fn negations(&self) -> u64 {
        self.negations
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Hook for SimpleStateMonitor {
    fn name(&self) -> &str {
        "simple-state"
    }

    fn call(&mut self, ctx: &mut HookContext<'_>) {
        let iteration = ctx.iteration();
        let sum = ctx.sum();

        if iteration.0 == 0 {
            self.reset();
            ctx.check(sum == 0, "accumulator not zero at start of run");
        } else if let Some((post_hook, prev)) = self.last {
            ctx.check(
                iteration.0 == prev.0.wrapping_add(1),
                "iteration does not follow the previous call",
            );
            let predicted = post_hook.wrapping_add(prev.as_addend());
            ctx.check(
                sum == predicted,
                "accumulator diverged from shadow prediction",
            );
        }

        if ctx.nondet_int() == 1 {
            ctx.anti_op();
            self.negations += 1;
            self.state = self.state.toggled();
        }

        ctx.check(
            self.state == MonitorState::for_count(self.negations),
            "state disagrees with negation parity",
        );

        self.last = Some((ctx.sum(), iteration));
    }
}
