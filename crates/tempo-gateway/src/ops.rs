//! Operational routes.
//!
//! - `/healthz` : liveness (also handy for watching the three built-in
//!   timing entries on a route with no custom intervals)

use async_trait::async_trait;
use serde_json::{json, Value};

use tempo_core::error::Result;

use crate::pipeline::{RequestCtx, RouteHandler};

pub struct HealthRoute;

#[async_trait]
impl RouteHandler for HealthRoute {
    async fn handle(&self, _ctx: &mut RequestCtx) -> Result<Value> {
        Ok(json!({ "status": "ok" }))
    }
}
