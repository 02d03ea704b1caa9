//! The [`Accumulator`] state value.
//!
//! A single signed integer owned by the driver for the duration of a run
//! and lent to the hook through [`HookContext`](crate::HookContext).
//! All arithmetic wraps: a run never panics on overflow.

use std::fmt;

use crate::id::Iteration;

/// Integer state threaded through every iteration of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Accumulator(i64);

impl Accumulator {
    /// A zeroed accumulator, the state at the start of every run.
    pub const ZERO: Self = Self(0);

    /// Wrap an explicit value.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Current value.
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Overwrite the current value.
    pub fn set(&mut self, value: i64) {
        self.0 = value;
    }

    /// Flip the sign. `i64::MIN` negates to itself.
    pub fn negate(&mut self) {
        self.0 = self.0.wrapping_neg();
    }

    /// Add the loop index, the driver's per-iteration update.
    ///
    /// Returns `true` when the addition wrapped.
    pub fn add_index(&mut self, iteration: Iteration) -> bool {
        let (value, wrapped) = self.0.overflowing_add(iteration.as_addend());
        self.0 = value;
        wrapped
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Accumulator> for i64 {
    fn from(acc: Accumulator) -> Self {
        acc.0
    }
}
