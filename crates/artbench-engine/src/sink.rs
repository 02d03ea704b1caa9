//! Diagnostic sinks: [`LogSink`] (default) and [`MemorySink`].

use std::sync::{Arc, Mutex};

use artbench_core::{Diagnostic, DiagnosticSink};
use log::warn;

/// Log target used for every reported diagnostic.
pub const DIAGNOSTIC_TARGET: &str = "artbench::assert";

/// Emits each diagnostic as a `warn`-level log record.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        warn!(target: DIAGNOSTIC_TARGET, "{diagnostic}");
    }
}

/// Collects diagnostics in memory.
///
/// Clones share one buffer, so a clone handed to a
/// [`Harness`](crate::Harness) can be inspected through the original.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    events: Arc<Mutex<Vec<Diagnostic>>>,
}

impl MemorySink {
    /// An empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every diagnostic reported so far, in order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of diagnostics reported so far.
    pub fn len(&self) -> usize {
        match self.events.lock() {
            Ok(events) => events.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// `true` if nothing has been reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn report(&mut self, diagnostic: Diagnostic) {
        match self.events.lock() {
            Ok(mut events) => events.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}
