//! Server-Timing lifecycle binder.
//!
//! Six hooks, one per pipeline phase. `OnRequest` attaches a fresh
//! [`Recorder`] to the request context and starts `total`; the auth and
//! handler phases bracket their intervals; `OnPreResponse` ends `total`,
//! serializes the recorder, and writes the value into the reply's own header
//! collection (success and boom replies store headers separately).
//!
//! `end` failures from these hooks are deliberately not caught here: a
//! mismatched start/end in handler code propagates as the hook's failure and
//! the pipeline turns it into a 500 boom. The intervals recorded up to that
//! point still reach the header.

use std::sync::Arc;

use axum::http::HeaderValue;

use tempo_core::error::Result;
use tempo_core::{Recorder, SERVER_TIMING};

use crate::pipeline::{LifecycleHook, Phase, Pipeline, Reply, RequestCtx};

struct TotalStart;

impl LifecycleHook for TotalStart {
    fn phase(&self) -> Phase {
        Phase::OnRequest
    }

    fn call(&self, ctx: &mut RequestCtx) -> Result<()> {
        let mut timings = Recorder::new();
        timings.start("total", Some("Total"));
        ctx.timings = Some(timings);
        Ok(())
    }
}

struct AuthStart;

impl LifecycleHook for AuthStart {
    fn phase(&self) -> Phase {
        Phase::OnPreAuth
    }

    fn call(&self, ctx: &mut RequestCtx) -> Result<()> {
        ctx.timings_mut()?.start("auth", Some("Authentication"));
        Ok(())
    }
}

struct AuthEnd;

impl LifecycleHook for AuthEnd {
    fn phase(&self) -> Phase {
        Phase::OnPostAuth
    }

    fn call(&self, ctx: &mut RequestCtx) -> Result<()> {
        ctx.timings_mut()?.end("auth")?;
        Ok(())
    }
}

struct HandlerStart;

impl LifecycleHook for HandlerStart {
    fn phase(&self) -> Phase {
        Phase::OnPreHandler
    }

    fn call(&self, ctx: &mut RequestCtx) -> Result<()> {
        ctx.timings_mut()?.start("handler", Some("Handler"));
        Ok(())
    }
}

struct HandlerEnd;

impl LifecycleHook for HandlerEnd {
    fn phase(&self) -> Phase {
        Phase::OnPostHandler
    }

    fn call(&self, ctx: &mut RequestCtx) -> Result<()> {
        ctx.timings_mut()?.end("handler")?;
        Ok(())
    }
}

struct Finalize;

impl LifecycleHook for Finalize {
    fn phase(&self) -> Phase {
        Phase::OnPreResponse
    }

    fn call(&self, ctx: &mut RequestCtx) -> Result<()> {
        // An earlier hook may have failed before the recorder was attached;
        // the response then simply carries no Server-Timing header.
        let Some(timings) = ctx.timings.as_mut() else {
            tracing::debug!("no recorder attached, skipping Server-Timing");
            return Ok(());
        };

        timings.end("total")?;
        let value = timings.header_value();

        let Some(reply) = ctx.reply_mut() else {
            return Ok(());
        };

        match HeaderValue::from_str(&value) {
            Ok(header) => match reply {
                Reply::Ok { headers, .. } => {
                    headers.insert(SERVER_TIMING, header);
                }
                Reply::Boom(boom) => {
                    boom.headers.insert(SERVER_TIMING, header);
                }
            },
            Err(_) => {
                tracing::warn!(%value, "Server-Timing value not header-safe, dropped");
            }
        }

        Ok(())
    }
}

/// Install the six timing hooks into a pipeline. Call once at assembly time.
pub fn register(pipeline: &Pipeline) {
    pipeline.ext(Arc::new(TotalStart));
    pipeline.ext(Arc::new(AuthStart));
    pipeline.ext(Arc::new(AuthEnd));
    pipeline.ext(Arc::new(HandlerStart));
    pipeline.ext(Arc::new(HandlerEnd));
    pipeline.ext(Arc::new(Finalize));
}
