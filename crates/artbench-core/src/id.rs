//! Strongly-typed loop index.

use std::fmt;

/// Zero-based index of the current driver iteration.
///
/// `Iteration(i)` is the `i`-th hook invocation of a run, and `i` is the
/// value the driver adds to the accumulator after that invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iteration(pub u64);

impl Iteration {
    /// The index as a signed addend.
    ///
    /// Harness configuration rejects iteration counts above `i64::MAX`,
    /// so within a run the conversion is lossless. Out-of-range indices
    /// saturate.
    pub fn as_addend(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Iteration {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
