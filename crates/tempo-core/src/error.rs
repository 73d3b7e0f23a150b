//! Shared error type across tempo crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, TempoError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum TempoError {
    /// `end` was called for an interval name that was never started.
    #[error("'{0}' entry not found")]
    EntryNotFound(String),
    /// No route matched the request.
    #[error("route not found")]
    RouteNotFound,
    /// Ticket resolution failed.
    #[error("auth failed")]
    AuthFailed,
    /// Invalid input / malformed config.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Internal fault (e.g. timings accessed before initialization).
    #[error("internal: {0}")]
    Internal(String),
}

impl TempoError {
    /// Map internal error to the HTTP status the gateway responds with.
    pub fn status(&self) -> u16 {
        match self {
            TempoError::EntryNotFound(_) => 500,
            TempoError::RouteNotFound => 404,
            TempoError::AuthFailed => 401,
            TempoError::BadRequest(_) => 400,
            TempoError::Internal(_) => 500,
        }
    }
}
