//! Ready-made hooks for the artbench driver.
//!
//! | Hook | Behaviour |
//! |------|-----------|
//! | [`NoopHook`] | Leaves the accumulator alone; final sum is triangular. |
//! | [`AntiOpHook`] | Negates on every call. |
//! | [`NondetAntiOpHook`] | Negates when the coin yields `1`. |
//! | [`SimpleStateMonitor`] | Two-state runtime monitor with shadow checks. |
//! | [`SignCheckHook`] | Negates, then asserts a sign property that negation breaks. |
//! | [`HookChain`] | Runs several hooks in order each iteration. |
//!
//! [`HookKind`] selects one of the stand-alone hooks by name.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod anti_op;
pub mod chain;
pub mod kind;
pub mod noop;
pub mod sign_check;
pub mod simple_state;

pub use anti_op::{AntiOpHook, NondetAntiOpHook};
pub use chain::HookChain;
pub use kind::{HookKind, UnknownHook};
pub use noop::NoopHook;
pub use sign_check::SignCheckHook;
pub use simple_state::{MonitorState, SimpleStateMonitor};
