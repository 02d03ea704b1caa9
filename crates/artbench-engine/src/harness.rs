//! The benchmark driver.
//!
//! [`Harness`] runs a [`Hook`] for a fixed number of iterations. Each
//! iteration lends the hook a [`HookContext`] over the run's accumulator,
//! then adds the loop index. The hook always runs before the addition.
//!
//! # Phases
//!
//! Every [`run()`](Harness::run) moves the harness `Idle → Running → Done`
//! in a single forward pass. There is no failure branch: diagnostics are
//! reported through the configured [`DiagnosticSink`] and the loop carries
//! on. After the loop the driver reports one `InternalCheckFailed` if any
//! index addition wrapped the accumulator. Calling `run()` again from `Done` starts a fresh run with a zeroed
//! accumulator and zeroed metrics; coin state carries over.

use std::time::{Duration, Instant};

use artbench_core::{
    Accumulator, CoinSource, Diagnostic, DiagnosticSink, Hook, HookContext, HookCounters,
    Iteration,
};
use log::{debug, info};

use crate::coin::SeededCoin;
use crate::config::{ConfigError, HarnessConfig, MAX_ITERATIONS};
use crate::metrics::RunMetrics;
use crate::report::{RunReport, TraceStep};
use crate::sink::LogSink;

// Compile-time assertion: Harness is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Harness>();
    }
};

// ── Phase ───────────────────────────────────────────────────────

/// Lifecycle of a [`Harness`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Built, never run.
    Idle,
    /// Inside the iteration loop.
    Running,
    /// Last run completed.
    Done,
}

// ── Harness ─────────────────────────────────────────────────────

/// Single-threaded, synchronous benchmark driver.
///
/// Created from a [`HarnessConfig`] via [`new()`](Harness::new). The
/// default coin is a [`SeededCoin`] built from the config's seed and
/// bias; the default sink is [`LogSink`]. Both can be replaced with
/// [`with_coin()`](Harness::with_coin) and
/// [`with_sink()`](Harness::with_sink).
///
/// # Example
///
/// ```
/// use artbench_core::{FnHook, HookContext};
/// use artbench_engine::{Harness, HarnessConfig};
///
/// let mut harness = Harness::new(HarnessConfig::with_iterations(3)).unwrap();
/// let mut hook = FnHook::new("flip", |ctx: &mut HookContext<'_>| ctx.anti_op());
/// let report = harness.run(&mut hook);
/// assert_eq!(report.sum(), 1);
/// assert_eq!(report.metrics.hook_calls, 3);
/// ```
pub struct Harness {
    config: HarnessConfig,
    coin: Box<dyn CoinSource + Send>,
    sink: Box<dyn DiagnosticSink + Send>,
    phase: Phase,
}

impl Harness {
    /// Create a harness from a validated [`HarnessConfig`].
    pub fn new(config: HarnessConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let coin = SeededCoin::with_bias(config.seed, config.p_one);
        Ok(Self::from_parts(config, Box::new(coin), Box::new(LogSink)))
    }

    fn from_parts(
        config: HarnessConfig,
        coin: Box<dyn CoinSource + Send>,
        sink: Box<dyn DiagnosticSink + Send>,
    ) -> Self {
        Self {
            config,
            coin,
            sink,
            phase: Phase::Idle,
        }
    }

    /// Replace the coin handed to hooks.
    pub fn with_coin(mut self, coin: impl CoinSource + Send + 'static) -> Self {
        self.coin = Box::new(coin);
        self
    }

    /// Replace the diagnostic sink.
    pub fn with_sink(mut self, sink: impl DiagnosticSink + Send + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// The configuration this harness was built from.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Run `hook` for the configured number of iterations.
    ///
    /// Infallible: failed checks are reported to the sink and counted in
    /// [`RunReport::metrics`], never propagated.
    pub fn run(&mut self, hook: &mut dyn Hook) -> RunReport {
        self.phase = Phase::Running;

        let iterations = self.config.iterations;
        let hook_name = hook.name().to_owned();
        debug!("running hook '{hook_name}' for {iterations} iterations");

        // Grows on demand; bounded by `trace_limit` below.
        let mut trace = self.config.record_trace.then(Vec::new);

        let mut acc = Accumulator::ZERO;
        let mut counters = HookCounters::default();
        let mut hook_calls: u64 = 0;
        let mut wraps: u64 = 0;
        let mut first_wrap: Option<Iteration> = None;

        let start = Instant::now();
        for i in 0..iterations {
            let iteration = Iteration(i);
            let before_hook = acc.value();
            {
                let mut ctx = HookContext::new(
                    &mut acc,
                    &mut *self.coin,
                    &mut *self.sink,
                    &mut counters,
                    &hook_name,
                    iteration,
                );
                hook.call(&mut ctx);
            }
            hook_calls += 1;
            let after_hook = acc.value();
            if acc.add_index(iteration) {
                wraps += 1;
                first_wrap.get_or_insert(iteration);
            }

            if let Some(steps) = trace.as_mut() {
                if steps.len() < self.config.trace_limit {
                    steps.push(TraceStep {
                        iteration,
                        before_hook,
                        after_hook,
                        after_add: acc.value(),
                    });
                }
            }
        }
        let elapsed = start.elapsed();

        let mut internal_check_failures = 0;
        if let Some(first) = first_wrap {
            internal_check_failures += 1;
            self.sink.report(Diagnostic::InternalCheckFailed {
                message: format!(
                    "index addition wrapped {wraps} time(s), first at iteration {first}"
                ),
            });
        }

        let report = RunReport {
            iterations,
            elapsed,
            sum: acc.value(),
            metrics: RunMetrics {
                hook_calls,
                negations: counters.negations,
                nondet_draws: counters.nondet_draws,
                assertion_failures: counters.assertion_failures,
                internal_check_failures,
            },
            trace,
        };
        self.phase = Phase::Done;

        info!(
            "{report} [hook={hook_name}, negations={}, failures={}, {:.6}s]",
            report.metrics.negations,
            report.metrics.total_failures(),
            report.elapsed_secs_f64(),
        );
        report
    }
}

impl std::fmt::Debug for Harness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Harness")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .finish()
    }
}

/// Run `hook` for `iterations` iterations with default collaborators.
///
/// Returns `(elapsed, final_accumulator)`. Counts above
/// [`MAX_ITERATIONS`] are clamped to it.
pub fn run(iterations: u64, hook: &mut dyn Hook) -> (Duration, i64) {
    let config = HarnessConfig::with_iterations(iterations.min(MAX_ITERATIONS));
    let coin = SeededCoin::with_bias(config.seed, config.p_one);
    let mut harness = Harness::from_parts(config, Box::new(coin), Box::new(LogSink));
    harness.run(hook).into_pair()
}
