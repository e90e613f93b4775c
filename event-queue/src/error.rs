//! Error types for the event queue

use thiserror::Error;

/// Event queue error
#[derive(Debug, Error)]
pub enum Error {
    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Stream creation/lookup error
    #[error("Stream error: {0}")]
    Stream(String),

    /// Consumer creation error
    #[error("Consumer error: {0}")]
    Consumer(String),

    /// Subscribe error
    #[error("Subscribe error: {0}")]
    Subscribe(String),

    /// Publish error
    #[error("Publish error: {0}")]
    Publish(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
