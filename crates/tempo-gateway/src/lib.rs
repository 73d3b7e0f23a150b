//! tempo gateway library entry.
//!
//! This crate wires the phase-ordered request pipeline, the Server-Timing
//! binder, config, and the axum HTTP front into a runnable gateway. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests, which drive `Pipeline::dispatch` directly.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod pipeline;
pub mod router;
pub mod timing;
