//! Hook that does nothing.

use artbench_core::{Hook, HookContext};

/// Leaves the accumulator untouched, so a run of `N` iterations ends at
/// `0 + 1 + … + (N-1)`. Useful as a baseline for loop overhead.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHook;

impl Hook for NoopHook {
    fn name(&self) -> &str {
        "noop"
    }

    fn call(&mut self, _ctx: &mut HookContext<'_>) {}
}
