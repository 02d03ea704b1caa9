//! The [`CoinSource`] nondeterminism collaborator.

/// A source of 0/1 choices, the `nondet_int` collaborator of a hook.
///
/// The distribution is implementation-defined. The driver never draws
/// from the coin itself; only hooks do, through
/// [`HookContext::nondet_int`](crate::HookContext::nondet_int).
pub trait CoinSource {
    /// Draw one choice. `true` maps to `1`, `false` to `0`.
    fn flip(&mut self) -> bool;
}

impl<C: CoinSource + ?Sized> CoinSource for Box<C> {
    fn flip(&mut self) -> bool {
        (**self).flip()
    }
}
