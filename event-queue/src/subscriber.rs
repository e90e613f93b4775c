//! Pull subscriber with explicit acknowledgment

use crate::{client::QueueClient, Error, QueueEvent, QueueMessage, Result};
use async_nats::jetstream::consumer;
use async_nats::jetstream::message::{AckKind, Message as JsMessage};
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{error, info, warn};

/// Message handler trait.
///
/// The handler decides the fate of each message through its lifecycle: call
/// [`QueueMessage::finish`] to acknowledge, or leave it pending to have the
/// transport redeliver it. A returned error is logged and the message is
/// treated by its lifecycle state, same as a normal return.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Handle one delivered message
    async fn on_message(&self, message: &mut QueueMessage) -> anyhow::Result<()>;
}

/// Subscriber configuration
#[derive(Debug, Clone)]
pub struct SubscriberConfig {
    /// Stream name
    pub stream: String,

    /// Subject the stream captures
    pub subject: String,

    /// Durable consumer name (shared by competing instances)
    pub durable_name: String,

    /// How long an unacknowledged message waits before redelivery
    pub ack_wait: Duration,

    /// Max delivery attempts per message
    pub max_deliver: i64,
}

impl Default for SubscriberConfig {
    fn default() -> Self {
        Self {
            stream: "gifts".to_string(),
            subject: "gifts.events".to_string(),
            durable_name: "donation-bridge".to_string(),
            ack_wait: Duration::from_secs(30),
            max_deliver: 5,
        }
    }
}

/// Pull subscriber: delivers one message at a time to the handler and
/// acknowledges it only once the handler has finished it.
pub struct Subscriber {
    client: QueueClient,
    config: SubscriberConfig,
}

impl Subscriber {
    /// Connect to the broker
    pub async fn connect(url: &str, config: SubscriberConfig) -> Result<Self> {
        let client = QueueClient::connect(url).await?;
        Ok(Self { client, config })
    }

    /// Consume messages until `shutdown` fires.
    ///
    /// Messages are processed strictly one at a time; a message already being
    /// handled when shutdown is requested is driven to its outcome before the
    /// loop exits.
    pub async fn run<H>(&self, handler: Arc<H>, mut shutdown: watch::Receiver<bool>) -> Result<()>
    where
        H: EventHandler + 'static,
    {
        let stream = self
            .client
            .ensure_stream(&self.config.stream, vec![self.config.subject.clone()])
            .await?;

        let consumer_config = consumer::pull::Config {
            durable_name: Some(self.config.durable_name.clone()),
            filter_subject: self.config.subject.clone(),
            ack_policy: consumer::AckPolicy::Explicit,
            ack_wait: self.config.ack_wait,
            max_deliver: self.config.max_deliver,
            deliver_policy: consumer::DeliverPolicy::All,
            ..Default::default()
        };

        let consumer: consumer::PullConsumer = stream
            .create_consumer(consumer_config)
            .await
            .map_err(|e| Error::Consumer(e.to_string()))?;

        info!(
            "Consuming stream {} (durable: {})",
            self.config.stream, self.config.durable_name
        );

        let mut messages = consumer
            .messages()
            .await
            .map_err(|e| Error::Subscribe(e.to_string()))?;

        loop {
            tokio::select! {
                _ = shutdown.changed() => {
                    info!("Shutdown requested, stopping consumer");
                    break;
                }
                next = messages.next() => {
                    match next {
                        Some(Ok(msg)) => dispatch(handler.as_ref(), msg).await,
                        Some(Err(e)) => {
                            error!("Failed to pull message: {}", e);
                        }
                        None => {
                            warn!("Message stream ended");
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

/// Deliver one message to the handler and settle its acknowledgment.
async fn dispatch<H: EventHandler>(handler: &H, msg: JsMessage) {
    match serde_json::from_slice::<QueueEvent>(&msg.payload) {
        Ok(event) => {
            let mut message = QueueMessage::new(event);

            if let Err(e) = handler.on_message(&mut message).await {
                error!("Handler failed: {:#}", e);
            }

            if message.is_finished() {
                if let Err(e) = msg.ack().await {
                    error!("Failed to ack message: {}", e);
                }
            }
            // Not finished: no ack. The message stays on the stream and is
            // redelivered after ack_wait, up to max_deliver attempts.
        }
        Err(e) => {
            error!("Failed to decode queue event: {}", e);

            // Terminate bad message (won't be redelivered)
            if let Err(term_err) = msg.ack_with(AckKind::Term).await {
                error!("Failed to terminate bad message: {}", term_err);
            }
        }
    }
}
