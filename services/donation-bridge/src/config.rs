use crate::errors::Result;
use crate::rates::{ConversionMode, RateTable};
use config::{ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub ledger: LedgerConfig,
    pub nats: NatsConfig,
    pub currency: CurrencyConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LedgerConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct NatsConfig {
    pub url: String,
    pub stream: String,
    pub subject: String,
    pub durable_name: String,
    pub ack_wait_secs: u64,
    pub max_deliver: i64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CurrencyConfig {
    pub base: String,
    pub mode: ConversionMode,
    pub rates: HashMap<String, Decimal>,
}

impl Config {
    pub fn from_env() -> std::result::Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 6017)?
            .set_default("ledger.base_url", "http://127.0.0.1:6016")?
            .set_default("ledger.timeout_secs", 10)?
            .set_default("nats.url", "nats://localhost:4222")?
            .set_default("nats.stream", "gifts")?
            .set_default("nats.subject", "gifts.events")?
            .set_default("nats.durable_name", "donation-bridge")?
            .set_default("nats.ack_wait_secs", 30)?
            .set_default("nats.max_deliver", 5)?
            .set_default("currency.base", "RUB")?
            .set_default("currency.mode", "scaled")?
            .set_default("currency.rates.RUB", "1")?
            .set_default("currency.rates.USD", "80")?
            .set_default("currency.rates.EUR", "90")?
            .set_default("currency.rates.POINTS", "1")?;

        if let Ok(config_file) = env::var("CONFIG_FILE") {
            builder = builder.add_source(File::with_name(&config_file).required(false));
        }

        // Override with environment variables
        builder = builder.add_source(
            Environment::with_prefix("DONATION_BRIDGE").separator("__"),
        );

        // Special handling for common env vars
        if let Ok(nats_url) = env::var("NATS_URL") {
            builder = builder.set_override("nats.url", nats_url)?;
        }

        if let Ok(ledger_url) = env::var("LEDGER_URL") {
            builder = builder.set_override("ledger.base_url", ledger_url)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.ledger.base_url.is_empty() {
            return Err("Ledger base URL is required".to_string());
        }

        if self.ledger.timeout_secs == 0 {
            return Err("Ledger timeout cannot be 0".to_string());
        }

        if self.nats.url.is_empty() {
            return Err("NATS URL is required".to_string());
        }

        if self.nats.max_deliver <= 0 {
            return Err("Max deliver must be positive".to_string());
        }

        if self.currency.rates.is_empty() {
            return Err("At least one currency rate is required".to_string());
        }

        Ok(())
    }

    /// Build the injected rate table.
    ///
    /// The config layer lowercases map keys, so codes are re-canonicalized
    /// to uppercase here before lookup ever happens.
    pub fn rate_table(&self) -> Result<RateTable> {
        let rates = self
            .currency
            .rates
            .iter()
            .map(|(code, rate)| (code.to_uppercase(), *rate))
            .collect();

        RateTable::new(
            self.currency.base.to_uppercase(),
            self.currency.mode,
            rates,
        )
    }
}
