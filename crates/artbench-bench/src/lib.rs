//! Benchmark profiles and utilities for the artbench driver.
//!
//! Provides pre-built [`HarnessConfig`] profiles for benchmarking:
//!
//! - [`reference_profile`]: 10K iterations, the fixed `N` of the binary
//! - [`stress_profile`]: 1M iterations for longer timing windows
//! - [`reference_workload`]: the monitor hook the binary drives by default

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use artbench_core::Hook;
use artbench_engine::{HarnessConfig, DEFAULT_ITERATIONS};
use artbench_hooks::HookKind;

/// Build a reference benchmark profile: 10K iterations, fair coin.
pub fn reference_profile(seed: u64) -> HarnessConfig {
    HarnessConfig {
        iterations: DEFAULT_ITERATIONS,
        seed,
        ..HarnessConfig::default()
    }
}

/// Build a stress benchmark profile: 1M iterations.
///
/// Same collaborators as [`reference_profile`] at 100x the iteration count.
pub fn stress_profile(seed: u64) -> HarnessConfig {
    HarnessConfig {
        iterations: 1_000_000,
        seed,
        ..HarnessConfig::default()
    }
}

/// The hook the `artbench` binary runs when none is named.
pub fn reference_workload() -> Box<dyn Hook + Send> {
    HookKind::default().build()
}
