use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};

use crate::config::DEFAULT_ENDPOINT;
use crate::domain::{Ticket, TicketFeed};
use crate::error::{BoardError, Result};
use crate::source::TicketSource;

/// Reads tickets with a single unauthenticated `GET`
pub struct HttpTicketSource {
    http: Client,
    endpoint: String,
}

impl HttpTicketSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTicketSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl TicketSource for HttpTicketSource {
    async fn fetch(&self) -> Result<Vec<Ticket>> {
        let response = self
            .http
            .get(&self.endpoint)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(BoardError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let feed = TicketFeed::from_slice(&bytes)?;
        Ok(feed.into_tickets())
    }
}
