//! Registry and dispatcher for hooks and route handlers.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use axum::http::Method;
use dashmap::DashMap;
use serde_json::Value;

use tempo_core::error::{Result, TempoError};

use crate::pipeline::context::{Incoming, RequestCtx};
use crate::pipeline::hooks::{FnHook, LifecycleHook};
use crate::pipeline::phase::Phase;
use crate::pipeline::reply::{Boom, Reply};

/// Route handlers (the "business" end of the pipeline).
#[async_trait]
pub trait RouteHandler: Send + Sync {
    async fn handle(&self, ctx: &mut RequestCtx) -> Result<Value>;
}

/// Ticket -> user resolution, performed between `OnPreAuth` and
/// `OnPostAuth`. Supplied by the application (config-backed in the gateway
/// binary).
pub trait TicketResolver: Send + Sync {
    fn resolve_ticket(&self, ticket: &str) -> Result<String>;
}

/// Request header carrying the auth ticket. Absent ticket = anonymous.
pub const TICKET_HEADER: &str = "x-ticket";

/// Registry and per-request dispatcher.
///
/// Hooks are kept per phase in registration order; routes are keyed by
/// method + path. Registration goes through `&self` so a shared pipeline can
/// be assembled incrementally, mirroring how requests later borrow it.
#[derive(Default)]
pub struct Pipeline {
    hooks: DashMap<Phase, Vec<Arc<dyn LifecycleHook>>>,
    routes: DashMap<(Method, String), Arc<dyn RouteHandler>>,
    resolver: RwLock<Option<Arc<dyn TicketResolver>>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook at its phase, after any hooks already registered
    /// there.
    pub fn ext(&self, hook: Arc<dyn LifecycleHook>) {
        self.hooks.entry(hook.phase()).or_default().push(hook);
    }

    /// Register a closure hook.
    pub fn ext_fn<F>(&self, phase: Phase, f: F)
    where
        F: Fn(&mut RequestCtx) -> Result<()> + Send + Sync + 'static,
    {
        self.ext(Arc::new(FnHook::new(phase, f)));
    }

    /// Register a route handler.
    pub fn route(&self, method: Method, path: &str, handler: Arc<dyn RouteHandler>) {
        self.routes.insert((method, path.to_string()), handler);
    }

    /// Install the ticket resolver used by the auth step.
    pub fn set_ticket_resolver(&self, resolver: Arc<dyn TicketResolver>) {
        if let Ok(mut slot) = self.resolver.write() {
            *slot = Some(resolver);
        }
    }

    /// Process one request through all phases and produce the reply.
    ///
    /// `OnPreResponse` always runs, on both the success and the boom path,
    /// so response-shaping hooks (like the Server-Timing binder) see every
    /// outcome.
    pub async fn dispatch(&self, incoming: Incoming) -> Reply {
        let mut ctx = RequestCtx::new(incoming);

        let reply = match self.run(&mut ctx).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::debug!(error = %e, path = %ctx.path, "request boomed");
                Reply::boom(&e)
            }
        };

        ctx.set_reply(reply);
        let reply = match self.run_phase(Phase::OnPreResponse, &mut ctx) {
            Ok(()) => ctx.take_reply().unwrap_or_else(|| {
                Reply::boom(&TempoError::Internal("reply lost in pre-response".into()))
            }),
            Err(e) => {
                // A failing pre-response hook demotes the reply to a boom.
                // Headers already written (e.g. Server-Timing) are carried
                // over; the phase is not re-run.
                tracing::warn!(error = %e, "pre-response hook failed");
                let mut boom = Boom::from_error(&e);
                if let Some(prev) = ctx.take_reply() {
                    boom.headers = prev.into_headers();
                }
                Reply::Boom(boom)
            }
        };

        tracing::debug!(
            method = %ctx.method,
            path = %ctx.path,
            status = reply.status().as_u16(),
            "request dispatched"
        );
        reply
    }

    /// Phases up to and including the handler. An `Err` here short-circuits
    /// straight to `OnPreResponse`.
    async fn run(&self, ctx: &mut RequestCtx) -> Result<Reply> {
        self.run_phase(Phase::OnRequest, ctx)?;

        // Routing happens after onRequest: a miss skips the auth and
        // handler phases entirely.
        let handler = self
            .routes
            .get(&(ctx.method.clone(), ctx.path.clone()))
            .map(|e| e.value().clone())
            .ok_or(TempoError::RouteNotFound)?;

        self.run_phase(Phase::OnPreAuth, ctx)?;
        self.authenticate(ctx)?;
        self.run_phase(Phase::OnPostAuth, ctx)?;

        self.run_phase(Phase::OnPreHandler, ctx)?;
        let body = handler.handle(ctx).await?;
        self.run_phase(Phase::OnPostHandler, ctx)?;

        Ok(Reply::ok(body))
    }

    fn run_phase(&self, phase: Phase, ctx: &mut RequestCtx) -> Result<()> {
        // Clone out of the shard so hook bodies never run under the map
        // guard.
        let hooks: Vec<Arc<dyn LifecycleHook>> = match self.hooks.get(&phase) {
            Some(entry) => entry.value().clone(),
            None => return Ok(()),
        };

        tracing::trace!(phase = phase.as_str(), hooks = hooks.len(), "running phase");
        for hook in hooks {
            hook.call(ctx)?;
        }
        Ok(())
    }

    fn authenticate(&self, ctx: &mut RequestCtx) -> Result<()> {
        let Some(raw) = ctx.headers.get(TICKET_HEADER) else {
            return Ok(());
        };
        let ticket = raw.to_str().map_err(|_| TempoError::AuthFailed)?;

        let resolver = self
            .resolver
            .read()
            .ok()
            .and_then(|slot| slot.clone())
            .ok_or(TempoError::AuthFailed)?;

        ctx.user = Some(resolver.resolve_ticket(ticket)?);
        Ok(())
    }
}
