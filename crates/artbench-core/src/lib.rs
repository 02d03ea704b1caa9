//! Core types and traits for the artbench driver.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared across the workspace: the [`Accumulator`]
//! state value, the [`Hook`] and [`CoinSource`] collaborator traits,
//! the [`HookContext`] lent to hooks each iteration, and the diagnostic
//! types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accumulator;
pub mod coin;
pub mod context;
pub mod diagnostic;
pub mod hook;
pub mod id;

pub use accumulator::Accumulator;
pub use coin::CoinSource;
pub use context::{HookContext, HookCounters};
pub use diagnostic::{Diagnostic, DiagnosticSink};
pub use hook::{FnHook, Hook};
pub use id::Iteration;
