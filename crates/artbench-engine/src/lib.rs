//! Benchmark driver for artbench.
//!
//! Provides the [`Harness`] that runs a hook for a fixed number of
//! iterations, threading an [`Accumulator`](artbench_core::Accumulator)
//! through the loop and timing the whole run. Failed checks become
//! structured diagnostics; nothing in a run can abort it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coin;
pub mod config;
pub mod harness;
pub mod metrics;
pub mod report;
pub mod sink;

pub use coin::SeededCoin;
pub use config::{ConfigError, HarnessConfig, DEFAULT_ITERATIONS, MAX_ITERATIONS};
pub use harness::{run, Harness, Phase};
pub use metrics::RunMetrics;
pub use report::{RunReport, TraceStep};
pub use sink::{LogSink, MemorySink};
