//! tempo core: the per-request interval recorder and error surface.
//!
//! This crate holds the transport-agnostic pieces of tempo: the `Recorder`
//! that accumulates named timing intervals for one request and serializes
//! them into a `Server-Timing` header value, plus the shared error type. It
//! intentionally carries no HTTP or runtime dependencies so the gateway and
//! tests can reuse it freely.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TempoError`/`Result` so a mismatched
//! start/end in handler code becomes a request error, not a process crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod recorder;

/// Shared result type.
pub use error::{Result, TempoError};
pub use recorder::{Recorder, TimingEntry};

/// Response header name the recorder serializes into. Lowercase so it can be
/// used directly as a static header name.
pub const SERVER_TIMING: &str = "server-timing";
