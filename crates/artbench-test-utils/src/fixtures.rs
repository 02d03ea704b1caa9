//! Reusable hook test fixtures.
//!
//! - [`CountingHook`]: counts calls, never touches the accumulator.
//! - [`ScriptedHook`]: negates on a chosen set of iterations.
//! - [`FailingCheckHook`]: fails a check every N iterations.
//! - [`RecordingHook`]: records the accumulator value it was handed.
//! - [`TamperHook`]: adds a constant through `accumulator_mut`.

use std::collections::BTreeSet;

use artbench_core::{Hook, HookContext};

/// Counts invocations and does nothing else.
#[derive(Debug, Default)]
pub struct CountingHook {
    calls: u64,
}

impl CountingHook {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `call()` has run.
    pub fn calls(&self) -> u64 {
        self.calls
    }
}

impl Hook for CountingHook {
    fn name(&self) -> &str {
        "counting"
    }

    fn call(&mut self, _ctx: &mut HookContext<'_>) {
        self.calls += 1;
    }
}

/// Negates the accumulator on selected iterations.
#[derive(Debug)]
pub struct ScriptedHook {
    negate_on: Option<BTreeSet<u64>>,
}

impl ScriptedHook {
    /// Negate on every call.
    pub fn always() -> Self {
        Self { negate_on: None }
    }

    /// Never negate.
    pub fn never() -> Self {
        Self::at(std::iter::empty())
    }

    /// Negate only on the listed iteration indices.
    pub fn at(iterations: impl IntoIterator<Item = u64>) -> Self {
        Self {
            negate_on: Some(iterations.into_iter().collect()),
        }
    }
}

impl Hook for ScriptedHook {
    fn name(&self) -> &str {
        "scripted"
    }

    fn call(&mut self, ctx: &mut HookContext<'_>) {
        let negate = match &self.negate_on {
            None => true,
            Some(set) => set.contains(&ctx.iteration().0),
        };
        if negate {
            ctx.anti_op();
        }
    }
}

/// Fails a check on every iteration divisible by `period`.
#[derive(Debug)]
pub struct FailingCheckHook {
    period: u64,
}

impl FailingCheckHook {
    /// `period` of zero is treated as one (fail every call).
    pub fn every(period: u64) -> Self {
        Self {
            period: period.max(1),
        }
    }
}

impl Hook for FailingCheckHook {
    fn name(&self) -> &str {
        "failing_check"
    }

    fn call(&mut self, ctx: &mut HookContext<'_>) {
        let ok = ctx.iteration().0 % self.period != 0;
        ctx.check(ok, "deliberate failure");
    }
}

/// Records the accumulator value seen at the start of each call.
#[derive(Debug, Default)]
pub struct RecordingHook {
    pub seen: Vec<i64>,
}

impl RecordingHook {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hook for RecordingHook {
    fn name(&self) -> &str {
        "recording"
    }

    fn call(&mut self, ctx: &mut HookContext<'_>) {
        self.seen.push(ctx.sum());
    }
}

/// Adds `delta` to the accumulator, bypassing `anti_op`.
#[derive(Debug)]
pub struct TamperHook {
    pub delta: i64,
}

impl TamperHook {
    pub fn new(delta: i64) -> Self {
        Self { delta }
    }
}

impl Hook for TamperHook {
    fn name(&self) -> &str {
        "tamper"
    }

    fn call(&mut self, ctx: &mut HookContext<'_>) {
        let acc = ctx.accumulator_mut();
        acc.set(acc.value().wrapping_add(self.delta));
    }
}
