use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Write-request body for the ledger's append endpoint.
///
/// `date` is the processing time, not an event time — gift events carry no
/// timestamp of their own. `value` goes over the wire as a JSON number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationPayload {
    pub date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub name: String,
}

impl DonationPayload {
    pub fn new(value: Decimal, name: String) -> Self {
        Self {
            date: Utc::now(),
            value,
            name,
        }
    }
}
