//! Structured diagnostics for failed checks.
//!
//! A failed check never changes control flow. It becomes a
//! [`Diagnostic`] handed to a [`DiagnosticSink`], which decides how (or
//! whether) to surface it.

use std::fmt;

use crate::id::Iteration;

/// A failed boolean condition observed during a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// A hook's `check` call saw a false condition.
    AssertionFailed {
        /// Iteration during which the check ran.
        iteration: Iteration,
        /// Name of the hook that made the check.
        hook: String,
        /// Description of the condition that failed.
        message: String,
    },
    /// One of the driver's own post-run checks failed.
    InternalCheckFailed {
        /// Description of the condition that failed.
        message: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssertionFailed {
                iteration,
                hook,
                message,
            } => write!(
                f,
                "assertion failed in hook '{hook}' at iteration {iteration}: {message}"
            ),
            Self::InternalCheckFailed { message } => {
                write!(f, "internal check failed: {message}")
            }
        }
    }
}

/// Receiver for [`Diagnostic`] events.
///
/// Reporting is fire-and-forget: sinks must not panic and have no way
/// to influence the run that produced the diagnostic.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
