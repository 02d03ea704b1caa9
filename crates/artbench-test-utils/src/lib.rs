//! Test utilities and mock collaborators for artbench development.
//!
//! Provides mock implementations of [`CoinSource`] and [`DiagnosticSink`]
//! plus a [`ContextHarness`] for calling a hook directly, outside the
//! driver. Hook fixtures live in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CountingHook, FailingCheckHook, RecordingHook, ScriptedHook, TamperHook};

use artbench_core::{
    Accumulator, CoinSource, Diagnostic, DiagnosticSink, Hook, HookContext, HookCounters,
    Iteration,
};

/// Coin that always yields the same side.
#[derive(Clone, Copy, Debug)]
pub struct FixedCoin {
    side: bool,
}

impl FixedCoin {
    pub fn new(side: bool) -> Self {
        Self { side }
    }
}

impl CoinSource for FixedCoin {
    fn flip(&mut self) -> bool {
        self.side
    }
}

/// Coin that replays a fixed sequence, cycling when exhausted.
///
/// An empty script always yields `false`.
#[derive(Clone, Debug)]
pub struct ScriptedCoin {
    script: Vec<bool>,
    pos: usize,
}

impl ScriptedCoin {
    pub fn new(script: Vec<bool>) -> Self {
        Self { script, pos: 0 }
    }

    /// Build from `0`/`1` integers, nonzero meaning `1`.
    pub fn from_ints(ints: &[i32]) -> Self {
        Self::new(ints.iter().map(|&v| v != 0).collect())
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl CoinSource for ScriptedCoin {
    fn flip(&mut self) -> bool {
        if self.script.is_empty() {
            self.pos += 1;
            return false;
        }
        let side = self.script[self.pos % self.script.len()];
        self.pos += 1;
        side
    }
}

/// Sink that keeps every diagnostic in a plain `Vec`.
#[derive(Debug, Default)]
pub struct VecSink {
    pub diagnostics: Vec<Diagnostic>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for VecSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

/// Owns everything a [`HookContext`] borrows, so a hook can be called
/// directly in unit tests.
///
/// Unlike the driver, `call` does not add the loop index: the caller
/// controls the accumulator between calls.
pub struct ContextHarness<C: CoinSource = FixedCoin> {
    pub accumulator: Accumulator,
    pub coin: C,
    pub sink: VecSink,
    pub counters: HookCounters,
}

impl ContextHarness<FixedCoin> {
    /// Harness whose coin always yields `0`.
    pub fn new() -> Self {
        Self::with_coin(FixedCoin::new(false))
    }
}

impl Default for ContextHarness<FixedCoin> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CoinSource> ContextHarness<C> {
    pub fn with_coin(coin: C) -> Self {
        Self {
            accumulator: Accumulator::ZERO,
            coin,
            sink: VecSink::new(),
            counters: HookCounters::default(),
        }
    }

    /// Invoke `hook` once at `iteration`.
    pub fn call(&mut self, hook: &mut dyn Hook, iteration: u64) {
        let name = hook.name().to_owned();
        let mut ctx = HookContext::new(
            &mut self.accumulator,
            &mut self.coin,
            &mut self.sink,
            &mut self.counters,
            &name,
            Iteration(iteration),
        );
        hook.call(&mut ctx);
    }

    /// Invoke `hook` then add the index, mirroring one driver iteration.
    pub fn step(&mut self, hook: &mut dyn Hook, iteration: u64) {
        self.call(hook, iteration);
        self.accumulator.add_index(Iteration(iteration));
    }

    pub fn sum(&self) -> i64 {
        self.accumulator.value()
    }

    pub fn failures(&self) -> usize {
        self.sink.diagnostics.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_coin_cycles() {
        let mut coin = ScriptedCoin::from_ints(&[1, 0, 0]);
        let got: Vec<bool> = (0..6).map(|_| coin.flip()).collect();
        assert_eq!(got, vec![true, false, false, true, false, false]);
        assert_eq!(coin.draws(), 6);
    }

    #[test]
    fn empty_script_yields_zero() {
        let mut coin = ScriptedCoin::new(Vec::new());
        assert!(!coin.flip());
        assert_eq!(coin.draws(), 1);
    }

    #[test]
    fn context_harness_step_adds_index() {
        let mut h = ContextHarness::new();
        let mut hook = ScriptedHook::always();
        h.step(&mut hook, 0);
        h.step(&mut hook, 1);
        h.step(&mut hook, 2);
        assert_eq!(h.sum(), 1);
        assert_eq!(h.counters.negations, 3);
    }
}
