use thiserror::Error;

pub type Result<T> = std::result::Result<T, BridgeError>;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Invalid rate table: {0}")]
    RateTable(String),

    #[error("Ledger client error: {0}")]
    Ledger(String),

    #[error("Queue error: {0}")]
    Queue(#[from] event_queue::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
