//! Sequential composition of hooks.

use artbench_core::{Hook, HookContext};

/// Runs each contained hook in order within a single iteration.
///
/// All hooks share one context, so later hooks see earlier hooks'
/// mutations. Diagnostics are attributed to the chain's name.
pub struct HookChain {
    name: String,
    hooks: Vec<Box<dyn Hook + Send>>,
}

impl HookChain {
    /// An empty chain. Behaves like a no-op until hooks are pushed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hooks: Vec::new(),
        }
    }

    /// Append a hook; builder style.
    pub fn then(mut self, hook: impl Hook + Send + 'static) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    /// Append an already-boxed hook.
    pub fn push(&mut self, hook: Box<dyn Hook + Send>) {
        self.hooks.push(hook);
    }

    /// Number of hooks in the chain.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// `true` if the chain holds no hooks.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

impl Hook for HookChain {
    fn name(&self) -> &str {
        &self.name
    }

    fn call(&mut self, ctx: &mut HookContext<'_>) {
        for hook in &mut self.hooks {
            hook.call(ctx);
        }
    }
}

impl std::fmt::Debug for HookChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.hooks.iter().map(|h| h.name()).collect();
        f.debug_struct("HookChain")
            .field("name", &self.name)
            .field("hooks", &names)
            .finish()
    }
}
