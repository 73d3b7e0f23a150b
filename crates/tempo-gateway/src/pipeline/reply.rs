//! Outgoing reply shapes.
//!
//! Success replies and boom (error) replies keep separate header
//! collections; pre-response hooks that set headers must pick the matching
//! one. Booms render as `{"statusCode","error","message"}` JSON bodies.

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};

use tempo_core::TempoError;

/// Error reply with its own header collection.
#[derive(Debug)]
pub struct Boom {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub message: String,
}

impl Boom {
    pub fn from_error(err: &TempoError) -> Self {
        Self {
            status: StatusCode::from_u16(err.status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            headers: HeaderMap::new(),
            message: err.to_string(),
        }
    }
}

/// Outgoing reply: success or boom.
#[derive(Debug)]
pub enum Reply {
    Ok {
        status: StatusCode,
        headers: HeaderMap,
        body: Value,
    },
    Boom(Boom),
}

impl Reply {
    pub fn ok(body: Value) -> Self {
        Reply::Ok {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body,
        }
    }

    pub fn boom(err: &TempoError) -> Self {
        Reply::Boom(Boom::from_error(err))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Reply::Ok { status, .. } => *status,
            Reply::Boom(b) => b.status,
        }
    }

    /// Headers of whichever shape this reply is.
    pub fn headers(&self) -> &HeaderMap {
        match self {
            Reply::Ok { headers, .. } => headers,
            Reply::Boom(b) => &b.headers,
        }
    }

    pub fn into_headers(self) -> HeaderMap {
        match self {
            Reply::Ok { headers, .. } => headers,
            Reply::Boom(b) => b.headers,
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Ok {
                status,
                headers,
                body,
            } => {
                let mut res = (status, Json(body)).into_response();
                res.headers_mut().extend(headers);
                res
            }
            Reply::Boom(b) => {
                let body = json!({
                    "statusCode": b.status.as_u16(),
                    "error": b.status.canonical_reason().unwrap_or("Unknown"),
                    "message": b.message,
                });
                let mut res = (b.status, Json(body)).into_response();
                res.headers_mut().extend(b.headers);
                res
            }
        }
    }
}
