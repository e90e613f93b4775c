use crate::errors::Result;
use crate::models::{DonateRequest, Donation};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(sqlx::Error::from)?
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .connect_with(options)
            .await?;

        let db = Database { pool };
        db.init_schema().await?;

        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS donations (
                id    INTEGER PRIMARY KEY AUTOINCREMENT,
                name  TEXT NOT NULL,
                date  TEXT NOT NULL,
                value REAL NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Append a donation record
    pub async fn insert_donation(&self, request: &DonateRequest) -> Result<Donation> {
        let donation = sqlx::query_as::<_, Donation>(
            r#"
            INSERT INTO donations (name, date, value)
            VALUES (?1, ?2, ?3)
            RETURNING id, name, date, value
            "#,
        )
        .bind(&request.name)
        .bind(request.date)
        .bind(request.value)
        .fetch_one(&self.pool)
        .await?;

        Ok(donation)
    }

    /// Running total over all donations; None when the ledger is empty
    pub async fn total_value(&self) -> Result<Option<f64>> {
        let total = sqlx::query_scalar::<_, Option<f64>>("SELECT SUM(value) FROM donations")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }
}
