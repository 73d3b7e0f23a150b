//! Shared application state for the tempo gateway.
//!
//! Assembles the pipeline once at startup: Server-Timing binder, config-backed
//! ticket resolver, and the built-in ops routes.

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::Method;

use tempo_core::error::{Result, TempoError};

use crate::config::GatewayConfig;
use crate::ops::HealthRoute;
use crate::pipeline::{Pipeline, TicketResolver};
use crate::timing;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    pipeline: Pipeline,
}

/// Ticket resolution backed by the `tickets` config section.
struct ConfigTickets {
    tickets: HashMap<String, String>,
}

impl TicketResolver for ConfigTickets {
    fn resolve_ticket(&self, ticket: &str) -> Result<String> {
        self.tickets
            .get(ticket)
            .cloned()
            .ok_or(TempoError::AuthFailed)
    }
}

impl AppState {
    pub fn new(cfg: GatewayConfig) -> Self {
        let pipeline = Pipeline::new();
        timing::register(&pipeline);

        let tickets = cfg
            .tickets
            .iter()
            .map(|t| (t.ticket.clone(), t.user.clone()))
            .collect();
        pipeline.set_ticket_resolver(Arc::new(ConfigTickets { tickets }));

        pipeline.route(Method::GET, "/healthz", Arc::new(HealthRoute));

        Self {
            inner: Arc::new(AppStateInner { cfg, pipeline }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.inner.pipeline
    }
}
