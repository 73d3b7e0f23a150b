//! Axum front (HTTP -> pipeline).
//!
//! A single fallback handler converts every request into a pipeline
//! `Incoming`, dispatches it, and renders the resulting `Reply`.

use axum::extract::{Request, State};
use axum::response::{IntoResponse, Response};
use axum::Router;

use crate::app_state::AppState;
use crate::pipeline::Incoming;

pub fn build_router(state: AppState) -> Router {
    Router::new().fallback(dispatch).with_state(state)
}

async fn dispatch(State(state): State<AppState>, req: Request) -> Response {
    let (parts, _body) = req.into_parts();
    let incoming = Incoming {
        method: parts.method,
        path: parts.uri.path().to_string(),
        headers: parts.headers,
    };

    state.pipeline().dispatch(incoming).await.into_response()
}
