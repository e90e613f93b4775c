use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Persisted donation record, append-only
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Donation {
    pub id: i64,
    pub name: String,
    pub date: DateTime<Utc>,
    pub value: f64,
}

/// Append request body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DonateRequest {
    pub date: DateTime<Utc>,
    pub value: f64,
    #[serde(default)]
    pub name: String,
}

/// Running total response; `Total` is null until the first donation lands
#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceResponse {
    #[serde(rename = "Total")]
    pub total: Option<f64>,
}
