use std::net::SocketAddr;

use serde::Deserialize;
use tempo_core::error::{Result, TempoError};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default = "default_tickets")]
    pub tickets: Vec<TicketConfig>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(TempoError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }

        self.gateway.validate()?;

        for t in &self.tickets {
            if t.ticket.is_empty() || t.user.is_empty() {
                return Err(TempoError::BadRequest(
                    "tickets entries must set both ticket and user".into(),
                ));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen.parse::<SocketAddr>().map_err(|_| {
            TempoError::BadRequest("gateway.listen must be a valid socket address".into())
        })?;
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// Static ticket -> user mapping used by the demo auth step.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TicketConfig {
    pub ticket: String,
    pub user: String,
}

fn default_tickets() -> Vec<TicketConfig> {
    vec![TicketConfig {
        ticket: "dev".into(),
        user: "user:dev".into(),
    }]
}
