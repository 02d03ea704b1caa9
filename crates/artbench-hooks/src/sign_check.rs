//! A negating hook paired with a property that negation breaks.

use artbench_core::{Hook, HookContext};

/// Negates on every call, then checks that the accumulator is
/// non-negative.
///
/// Under the driver the check fails from iteration 2 onward, since the
/// value left by iteration 1 is positive and the negation flips it. A
/// run of `n` iterations reports `n - 2` failures (none for `n < 3`).
#[derive(Clone, Copy, Debug, Default)]
pub struct SignCheckHook;

impl Hook for SignCheckHook {
    fn name(&self) -> &str {
        "sign-check"
    }

    fn call(&mut self, ctx: &mut HookContext<'_>) {
        ctx.anti_op();
        let sum = ctx.sum();
        ctx.check(sum >= 0, &format!("sum {sum} is negative"));
    }
}
