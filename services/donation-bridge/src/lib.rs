pub mod config;
pub mod consumer;
pub mod errors;
pub mod filter;
pub mod ledger_client;
pub mod models;
pub mod rates;

pub use config::Config;
pub use consumer::DonationConsumer;
pub use errors::{BridgeError, Result};
pub use ledger_client::{ForwardOutcome, Forwarder, LedgerClient};
pub use rates::{ConversionMode, RateTable};
