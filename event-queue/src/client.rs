//! NATS connection and stream bootstrap

use async_nats::jetstream::{
    self,
    stream::{Config as StreamConfig, RetentionPolicy, Stream},
};
use tracing::info;

use crate::{Error, Result};

/// Connection to the queue broker, holding a JetStream context
pub struct QueueClient {
    context: jetstream::Context,
}

impl QueueClient {
    /// Connect to NATS and build a JetStream context
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting to NATS at {}", url);

        let client = async_nats::connect(url)
            .await
            .map_err(|e| Error::Connection(e.to_string()))?;

        Ok(Self {
            context: jetstream::new(client),
        })
    }

    /// JetStream context
    pub fn jetstream(&self) -> &jetstream::Context {
        &self.context
    }

    /// Get or create the work-queue stream backing a subject.
    ///
    /// Work-queue retention: an acknowledged message is removed from the
    /// stream; an unacknowledged one stays and is redelivered.
    pub async fn ensure_stream(&self, name: &str, subjects: Vec<String>) -> Result<Stream> {
        let config = StreamConfig {
            name: name.to_string(),
            description: Some(format!("Gift event stream: {}", name)),
            subjects,
            retention: RetentionPolicy::WorkQueue,
            ..Default::default()
        };

        self.context
            .get_or_create_stream(config)
            .await
            .map_err(|e| Error::Stream(e.to_string()))
    }
}
