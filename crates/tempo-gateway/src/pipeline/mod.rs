//! Phase-ordered request pipeline.
//!
//! The pipeline models the six fixed lifecycle extension points every request
//! passes through (or skips past, on route miss / error) and dispatches
//! registered hooks and route handlers in that order. The Server-Timing
//! binder in `crate::timing` is one consumer of these extension points;
//! tests register ad-hoc hooks through the same registry.

pub mod context;
pub mod engine;
pub mod hooks;
pub mod phase;
pub mod reply;

pub use context::{Incoming, RequestCtx};
pub use engine::{Pipeline, RouteHandler, TicketResolver, TICKET_HEADER};
pub use hooks::{FnHook, LifecycleHook};
pub use phase::Phase;
pub use reply::{Boom, Reply};
