//! Name-based hook selection.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use artbench_core::Hook;

use crate::{AntiOpHook, NondetAntiOpHook, NoopHook, SignCheckHook, SimpleStateMonitor};

/// One of the stand-alone library hooks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HookKind {
    /// [`NoopHook`].
    Noop,
    /// [`AntiOpHook`].
    AntiOp,
    /// [`NondetAntiOpHook`].
    NondetAntiOp,
    /// [`SimpleStateMonitor`].
    #[default]
    SimpleState,
    /// [`SignCheckHook`].
    SignCheck,
}

impl HookKind {
    /// Every kind, in declaration order.
    pub const ALL: [HookKind; 5] = [
        Self::Noop,
        Self::AntiOp,
        Self::NondetAntiOp,
        Self::SimpleState,
        Self::SignCheck,
    ];

    /// The name accepted by [`FromStr`] and reported by the built hook.
    pub fn name(self) -> &'static str {
        match self {
            Self::Noop => "noop",
            Self::AntiOp => "anti-op",
            Self::NondetAntiOp => "nondet-anti-op",
            Self::SimpleState => "simple-state",
            Self::SignCheck => "sign-check",
        }
    }

    /// Construct a fresh hook of this kind.
    pub fn build(self) -> Box<dyn Hook + Send> {
        match self {
            Self::Noop => Box::new(NoopHook),
            Self::AntiOp => Box::new(AntiOpHook),
            Self::NondetAntiOp => Box::new(NondetAntiOpHook),
            Self::SimpleState => Box::new(SimpleStateMonitor::new()),
            Self::SignCheck => Box::new(SignCheckHook),
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HookKind {
    type Err = UnknownHook;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownHook {
                name: s.to_string(),
            })
    }
}

/// A hook name that matches no [`HookKind`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownHook {
    /// The rejected name.
    pub name: String,
}

impl fmt::Display for UnknownHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = HookKind::ALL.iter().map(|k| k.name()).collect();
        write!(
            f,
            "unknown hook '{}' (expected one of: {})",
            self.name,
            known.join(", ")
        )
    }
}

impl Error for UnknownHook {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for kind in HookKind::ALL {
            assert_eq!(kind.name().parse::<HookKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn built_hook_reports_kind_name() {
        for kind in HookKind::ALL {
            assert_eq!(kind.build().name(), kind.name());
        }
    }

    #[test]
    fn default_is_simple_state() {
        assert_eq!(HookKind::default(), HookKind::SimpleState);
    }

    #[test]
    fn unknown_name_rejected() {
        let err = "flip".parse::<HookKind>().unwrap_err();
        assert_eq!(err.name, "flip");
        assert_eq!(
            err.to_string(),
            "unknown hook 'flip' (expected one of: noop, anti-op, nondet-anti-op, simple-state, sign-check)"
        );
    }
}
