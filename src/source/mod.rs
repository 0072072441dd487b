use crate::{domain::Ticket, error::Result};
use async_trait::async_trait;
use tracing::{debug, error};

pub mod http;

pub use http::HttpTicketSource;

/// Where the board's tickets come from
#[async_trait]
pub trait TicketSource: Send + Sync {
    /// Fetches the full ticket list
    async fn fetch(&self) -> Result<Vec<Ticket>>;
}

/// Serves a fixed ticket list
#[derive(Debug, Clone, Default)]
pub struct StaticTicketSource {
    tickets: Vec<Ticket>,
}

impl StaticTicketSource {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }
}

#[async_trait]
impl TicketSource for StaticTicketSource {
    async fn fetch(&self) -> Result<Vec<Ticket>> {
        Ok(self.tickets.clone())
    }
}

/// Fetches tickets once, logging and swallowing any failure
///
/// A failed fetch yields an empty list; there is no retry.
pub async fn load_tickets(source: &dyn TicketSource) -> Vec<Ticket> {
    match source.fetch().await {
        Ok(tickets) => {
            debug!(count = tickets.len(), "Fetched tickets");
            tickets
        }
        Err(err) => {
            error!(error = %err, "Error fetching tickets");
            Vec::new()
        }
    }
}
