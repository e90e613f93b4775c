//! Currency normalization against a static rate table

use crate::errors::{BridgeError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How non-base amounts are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Multiply by the source currency's rate: 100 USD at rate 80 → 8000.
    Scaled,
    /// Leave the amount untouched. Reproduces the behavior of the legacy
    /// bridge this replaces, whose conversion call never applied the rate;
    /// kept selectable until every downstream consumer is migrated off the
    /// old numbers. Rate-table membership is still enforced.
    Passthrough,
}

/// Immutable currency → rate mapping, injected at construction time.
///
/// Rates are expressed as units of base currency per one unit of source
/// currency. Every currency the bridge may see must have an entry; a missing
/// entry is a configuration error, not a per-message one.
#[derive(Debug, Clone)]
pub struct RateTable {
    base: String,
    base_rate: Decimal,
    mode: ConversionMode,
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn new(
        base: String,
        mode: ConversionMode,
        rates: HashMap<String, Decimal>,
    ) -> Result<Self> {
        let base_rate = *rates
            .get(&base)
            .ok_or_else(|| BridgeError::RateTable(format!("base currency {} has no rate", base)))?;

        if base_rate.is_zero() {
            return Err(BridgeError::RateTable(format!(
                "base currency {} has a zero rate",
                base
            )));
        }

        Ok(Self {
            base,
            base_rate,
            mode,
            rates,
        })
    }

    /// Convert `amount` in `currency` to the base currency.
    ///
    /// The base currency always passes through unchanged. An unknown code
    /// fails loudly — defaulting here would corrupt the ledger.
    pub fn normalize(&self, amount: Decimal, currency: &str) -> Result<Decimal> {
        let rate = self
            .rates
            .get(currency)
            .ok_or_else(|| BridgeError::UnknownCurrency(currency.to_string()))?;

        if currency == self.base {
            return Ok(amount);
        }

        match self.mode {
            ConversionMode::Scaled => Ok(amount * rate / self.base_rate),
            ConversionMode::Passthrough => Ok(amount),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }
}
