//! The [`Hook`] trait and the [`FnHook`] closure adapter.
//!
//! A hook is the per-iteration entry routine under test. The driver
//! calls it once per iteration, before adding the loop index to the
//! accumulator.

use crate::context::HookContext;

/// The externally supplied per-iteration callback.
///
/// # Contract
///
/// - `call()` is infallible; failed conditions are reported through
///   [`HookContext::check`], never by panicking or returning early.
/// - A hook may read and write the accumulator arbitrarily.
/// - Hooks may carry state between calls (`&mut self`).
///
/// # Object safety
///
/// This trait is object-safe; the driver takes `&mut dyn Hook`.
///
/// # Examples
///
/// A hook that negates the accumulator on odd iterations:
///
/// ```
/// use artbench_core::{Hook, HookContext};
///
/// struct OddFlip;
///
/// impl Hook for OddFlip {
///     fn name(&self) -> &str { "odd_flip" }
///
///     fn call(&mut self, ctx: &mut HookContext<'_>) {
///         if ctx.iteration().0 % 2 == 1 {
///             ctx.anti_op();
///         }
///     }
/// }
///
/// assert_eq!(OddFlip.name(), "odd_flip");
/// ```
pub trait Hook {
    /// Human-readable name for diagnostics and logs.
    fn name(&self) -> &str;

    /// Run the hook for one iteration.
    fn call(&mut self, ctx: &mut HookContext<'_>);
}

impl<H: Hook + ?Sized> Hook for Box<H> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn call(&mut self, ctx: &mut HookContext<'_>) {
        (**self).call(ctx);
    }
}

/// Adapts a closure into a named [`Hook`].
pub struct FnHook<F> {
    name: String,
    f: F,
}

impl<F> FnHook<F>
where
    F: FnMut(&mut HookContext<'_>),
{
    /// Wrap `f` under the given name.
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Hook for FnHook<F>
where
    F: FnMut(&mut HookContext<'_>),
{
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&mut self, ctx: &mut HookContext<'_>) {
        (self.f)(ctx);
    }
}

impl<F> std::fmt::Debug for FnHook<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHook").field("name", &self.name).finish()
    }
}
