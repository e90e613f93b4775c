//! Outbound write path to the ledger service

use crate::errors::{BridgeError, Result};
use crate::models::DonationPayload;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Outcome of a single write attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardOutcome {
    /// The ledger produced an HTTP response. The body is not inspected; a
    /// non-success status is logged but still counts as delivered.
    Delivered,
    /// The endpoint could not be connected to, or the request timed out.
    /// Retryable — the queue's redelivery handles it.
    Unreachable,
}

/// Single-attempt delivery into the ledger. One network call per invocation;
/// retries belong to the queue transport, not here.
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, payload: DonationPayload) -> Result<ForwardOutcome>;
}

pub struct LedgerClient {
    donate_url: String,
    client: Client,
}

impl LedgerClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| BridgeError::Ledger(format!("failed to build HTTP client: {}", e)))?;

        Ok(LedgerClient {
            donate_url: format!("{}/donate", base_url.trim_end_matches('/')),
            client,
        })
    }
}

#[async_trait]
impl Forwarder for LedgerClient {
    async fn forward(&self, payload: DonationPayload) -> Result<ForwardOutcome> {
        let response = match self.client.post(&self.donate_url).json(&payload).send().await {
            Ok(response) => response,
            Err(e) if e.is_connect() || e.is_timeout() => {
                warn!("Can't connect to ledger service: {}", e);
                return Ok(ForwardOutcome::Unreachable);
            }
            Err(e) => {
                return Err(BridgeError::Ledger(format!("donate request failed: {}", e)));
            }
        };

        if !response.status().is_success() {
            warn!(
                status = %response.status(),
                "Ledger rejected donation write"
            );
        } else {
            debug!(value = %payload.value, name = %payload.name, "Donation forwarded");
        }

        Ok(ForwardOutcome::Delivered)
    }
}
