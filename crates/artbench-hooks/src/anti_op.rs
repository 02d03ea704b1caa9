//! Negating hooks: unconditional and coin-driven.

use artbench_core::{Hook, HookContext};

/// Negates the accumulator on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct AntiOpHook;

impl Hook for AntiOpHook {
    fn name(&self) -> &str {
        "anti-op"
    }

    fn call(&mut self, ctx: &mut HookContext<'_>) {
        ctx.anti_op();
    }
}

/// Negates the accumulator when `nondet_int()` yields `1`.
///
/// Draws exactly one coin per call, so with a seeded coin the whole run
/// is reproducible.
#[derive(Clone, Copy, Debug, Default)]
pub struct NondetAntiOpHook;

impl Hook for NondetAntiOpHook {
    fn name(&self) -> &str {
        "nondet-anti-op"
    }

    fn call(&mut self, ctx: &mut HookContext<'_>) {
        if ctx.nondet_int() == 1 {
            ctx.anti_op();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artbench_test_utils::{ContextHarness, ScriptedCoin};

    #[test]
    fn anti_op_negates_each_call() {
        let mut h = ContextHarness::new();
        h.accumulator.set(4);
        h.call(&mut AntiOpHook, 0);
        assert_eq!(h.sum(), -4);
        h.call(&mut AntiOpHook, 1);
        assert_eq!(h.sum(), 4);
        assert_eq!(h.counters.negations, 2);
    }

    #[test]
    fn anti_op_three_driver_steps() {
        let mut h = ContextHarness::new();
        for i in 0..3 {
            h.step(&mut AntiOpHook, i);
        }
        assert_eq!(h.sum(), 1);
    }

    #[test]
    fn nondet_follows_coin() {
        let mut h = ContextHarness::with_coin(ScriptedCoin::from_ints(&[1, 0, 1]));
        h.accumulator.set(5);
        let mut hook = NondetAntiOpHook;

        h.call(&mut hook, 0);
        assert_eq!(h.sum(), -5);
        h.call(&mut hook, 1);
        assert_eq!(h.sum(), -5);
        h.call(&mut hook, 2);
        assert_eq!(h.sum(), 5);

        assert_eq!(h.counters.nondet_draws, 3);
        assert_eq!(h.counters.negations, 2);
    }
}
