//! artbench: a timed driver for runtime-verification hooks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the artbench sub-crates, plus the argument model of the `artbench`
//! binary.
//!
//! # Quick start
//!
//! ```rust
//! use artbench::prelude::*;
//!
//! let mut harness = Harness::new(HarnessConfig::with_iterations(3)).unwrap();
//! let report = harness.run(&mut AntiOpHook);
//! assert_eq!(report.sum(), 1);
//! let secs = report.elapsed().as_secs();
//! assert_eq!(report.to_string(), format!("3 took {secs}s (sum=1)"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `artbench-core` | Accumulator, hook and coin traits, diagnostics |
//! | [`engine`] | `artbench-engine` | Harness, config, reports, sinks, seeded coin |
//! | [`hooks`] | `artbench-hooks` | Library hooks and the simple-state monitor |
//! | [`cli`] | this crate | Command-line arguments of the binary |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cli;

/// Core types and traits (`artbench-core`).
pub use artbench_core as types;

/// Benchmark driver (`artbench-engine`).
pub use artbench_engine as engine;

/// Library hooks (`artbench-hooks`).
pub use artbench_hooks as hooks;

/// Common imports for typical artbench usage.
pub mod prelude {
    pub use artbench_core::{
        Accumulator, CoinSource, Diagnostic, DiagnosticSink, FnHook, Hook, HookContext, Iteration,
    };

    pub use artbench_engine::{
        ConfigError, Harness, HarnessConfig, LogSink, MemorySink, Phase, RunMetrics, RunReport,
        SeededCoin,
    };

    pub use artbench_hooks::{
        AntiOpHook, HookChain, HookKind, NondetAntiOpHook, NoopHook, SignCheckHook,
        SimpleStateMonitor,
    };
}
