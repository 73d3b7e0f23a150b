//! Lifecycle hook trait and adapters.

use tempo_core::error::Result;

use crate::pipeline::context::RequestCtx;
use crate::pipeline::phase::Phase;

/// A callback bound to one pipeline phase.
///
/// Hooks are synchronous relative to the pipeline: the pipeline does not
/// advance until the hook returns. A returned error aborts the remaining
/// phases and becomes the request's boom reply; only `OnPreResponse` still
/// runs afterwards.
pub trait LifecycleHook: Send + Sync {
    fn phase(&self) -> Phase;
    fn call(&self, ctx: &mut RequestCtx) -> Result<()>;
}

/// Closure adapter, mainly for ad-hoc extensions in tests and wiring code.
pub struct FnHook<F> {
    phase: Phase,
    f: F,
}

impl<F> FnHook<F>
where
    F: Fn(&mut RequestCtx) -> Result<()> + Send + Sync,
{
    pub fn new(phase: Phase, f: F) -> Self {
        Self { phase, f }
    }
}

impl<F> LifecycleHook for FnHook<F>
where
    F: Fn(&mut RequestCtx) -> Result<()> + Send + Sync,
{
    fn phase(&self) -> Phase {
        self.phase
    }

    fn call(&self, ctx: &mut RequestCtx) -> Result<()> {
        (self.f)(ctx)
    }
}
