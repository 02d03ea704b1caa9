//! Harness configuration, validation, and error types.
//!
//! [`HarnessConfig`] is the builder-input for constructing a
//! [`Harness`](crate::Harness). [`validate()`](HarnessConfig::validate)
//! checks structural invariants up front so that a run itself has no
//! failure modes.

use std::error::Error;
use std::fmt;

/// Iteration count used when none is given: the fixed `N` of the
/// reference benchmark.
pub const DEFAULT_ITERATIONS: u64 = 10_000;

/// Largest accepted iteration count. Loop indices are added to a signed
/// accumulator, so every index must fit in `i64`.
pub const MAX_ITERATIONS: u64 = i64::MAX as u64;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`HarnessConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Iteration count exceeds [`MAX_ITERATIONS`].
    IterationsOverflow {
        /// The configured count.
        value: u64,
    },
    /// Coin bias is NaN, infinite, or outside `[0.0, 1.0]`.
    InvalidProbability {
        /// The invalid value.
        value: f64,
    },
    /// Tracing is enabled but `trace_limit` is zero.
    TraceLimitZero,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IterationsOverflow { value } => {
                write!(f, "iterations {value} exceeds maximum of {MAX_ITERATIONS}")
            }
            Self::InvalidProbability { value } => {
                write!(f, "p_one must be finite and in [0.0, 1.0], got {value}")
            }
            Self::TraceLimitZero => write!(f, "trace_limit must be at least 1 when tracing"),
        }
    }
}

impl Error for ConfigError {}

// ── HarnessConfig ──────────────────────────────────────────────────

/// Complete configuration for a benchmark run.
#[derive(Clone, Debug, PartialEq)]
pub struct HarnessConfig {
    /// Number of hook invocations per run. Default: 10000.
    pub iterations: u64,
    /// Seed for the default [`SeededCoin`](crate::SeededCoin). Default: 0.
    pub seed: u64,
    /// Probability that the default coin yields `1`. Default: 0.5.
    pub p_one: f64,
    /// Record a per-iteration [`TraceStep`](crate::TraceStep). Default: off.
    pub record_trace: bool,
    /// Maximum number of trace steps kept per run. Default: 10000.
    pub trace_limit: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: 0,
            p_one: 0.5,
            record_trace: false,
            trace_limit: 10_000,
        }
    }
}

impl HarnessConfig {
    /// Default configuration with the given iteration count.
    pub fn with_iterations(iterations: u64) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Every loop index must fit in the signed accumulator.
        if self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::IterationsOverflow {
                value: self.iterations,
            });
        }
        // 2. Coin bias is a probability.
        if !self.p_one.is_finite() || !(0.0..=1.0).contains(&self.p_one) {
            return Err(ConfigError::InvalidProbability { value: self.p_one });
        }
        // 3. A trace with no room is a misconfiguration, not an empty trace.
        if self.record_trace && self.trace_limit == 0 {
            return Err(ConfigError::TraceLimitZero);
        }
        Ok(())
    }
}
