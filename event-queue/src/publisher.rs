//! Event publisher

use crate::{client::QueueClient, Error, QueueEvent, Result};
use tracing::debug;

/// Publishes gift events onto the stream subject
pub struct Publisher {
    client: QueueClient,
    subject: String,
}

impl Publisher {
    /// Connect to the broker and ensure the stream exists
    pub async fn connect(url: &str, stream: &str, subject: &str) -> Result<Self> {
        let client = QueueClient::connect(url).await?;
        client.ensure_stream(stream, vec![subject.to_string()]).await?;

        Ok(Self {
            client,
            subject: subject.to_string(),
        })
    }

    /// Publish one event and wait for the stream's acknowledgment
    pub async fn publish(&self, event: &QueueEvent) -> Result<()> {
        let payload = serde_json::to_vec(event)?;

        self.client
            .jetstream()
            .publish(self.subject.clone(), payload.into())
            .await
            .map_err(|e| Error::Publish(e.to_string()))?
            .await
            .map_err(|e| Error::Publish(e.to_string()))?;

        debug!("Published {} event to {}", event.event_type, self.subject);

        Ok(())
    }
}
