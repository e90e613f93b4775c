//! The bridge core: one gift event in, at most one ledger write out

use crate::filter;
use crate::ledger_client::{ForwardOutcome, Forwarder};
use crate::models::DonationPayload;
use crate::rates::RateTable;
use async_trait::async_trait;
use event_queue::{EventHandler, QueueMessage};
use rust_decimal::Decimal;
use tracing::{debug, error, warn};

/// Consumes gift events and forwards eligible donations into the ledger.
///
/// Per message: filter, normalize, build payload, forward. The message is
/// finished when the event is ineligible (drop) or the write was delivered;
/// it is left pending — and therefore redelivered — when the ledger is
/// unreachable or processing failed.
pub struct DonationConsumer<F: Forwarder> {
    rates: RateTable,
    forwarder: F,
}

impl<F: Forwarder> DonationConsumer<F> {
    pub fn new(rates: RateTable, forwarder: F) -> Self {
        Self { rates, forwarder }
    }
}

#[async_trait]
impl<F: Forwarder> EventHandler for DonationConsumer<F> {
    async fn on_message(&self, message: &mut QueueMessage) -> anyhow::Result<()> {
        let event = message.event().clone();
        debug!(event_type = %event.event_type, "Processing gift event");

        if !filter::is_forwardable(&event) {
            message.finish();
            return Ok(());
        }

        // The filter guarantees a positive amount past this point
        let amount = event.amount.unwrap_or(Decimal::ZERO);
        let value = self.rates.normalize(amount, &event.currency)?;

        let payload = DonationPayload::new(value, event.user_name);

        match self.forwarder.forward(payload).await {
            Ok(ForwardOutcome::Delivered) => {
                message.finish();
            }
            Ok(ForwardOutcome::Unreachable) => {
                warn!("Ledger unreachable, leaving message pending for redelivery");
            }
            Err(e) => {
                // Redelivery is bounded by the consumer's max_deliver, so a
                // persistently failing message cannot loop forever.
                error!("Forward attempt failed: {}", e);
            }
        }

        Ok(())
    }
}
