//! Per-request context owning the timing recorder.

use axum::http::{HeaderMap, Method};

use tempo_core::error::{Result, TempoError};
use tempo_core::Recorder;

use crate::pipeline::reply::Reply;

/// Request line + headers handed to the pipeline by the HTTP front.
#[derive(Debug)]
pub struct Incoming {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
}

impl Incoming {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
        }
    }
}

/// Mutable per-request state.
///
/// Created fresh for every request and dropped with it; only hooks and the
/// route handler processing this request ever touch it, so the recorder
/// needs no locking. `timings` is the fixed field route handlers use to add
/// custom intervals.
pub struct RequestCtx {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    /// Set by the auth step when a ticket resolves.
    pub user: Option<String>,
    /// Attached by the Server-Timing binder at `OnRequest`. Stays `None`
    /// when an earlier hook failed before the binder ran.
    pub timings: Option<Recorder>,
    reply: Option<Reply>,
}

impl RequestCtx {
    pub fn new(incoming: Incoming) -> Self {
        Self {
            method: incoming.method,
            path: incoming.path,
            headers: incoming.headers,
            user: None,
            timings: None,
            reply: None,
        }
    }

    /// Recorder access for handlers and hooks that require it.
    ///
    /// Errors when no recorder was attached (the binder never ran), so a
    /// misplaced timing call surfaces as a request error.
    pub fn timings_mut(&mut self) -> Result<&mut Recorder> {
        self.timings
            .as_mut()
            .ok_or_else(|| TempoError::Internal("timings not initialized".into()))
    }

    /// The outgoing reply, available during `OnPreResponse`.
    pub fn reply_mut(&mut self) -> Option<&mut Reply> {
        self.reply.as_mut()
    }

    pub(crate) fn set_reply(&mut self, reply: Reply) {
        self.reply = Some(reply);
    }

    pub(crate) fn take_reply(&mut self) -> Option<Reply> {
        self.reply.take()
    }
}
