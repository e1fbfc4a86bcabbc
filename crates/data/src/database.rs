use anyhow::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};
use volguard_core::DatabaseConfig;

pub struct DatabaseClient {
    pool: PgPool,
}

impl DatabaseClient {
    /// Creates a new database client connected to the configured
    /// `PostgreSQL` database.
    ///
    /// # Errors
    /// Returns an error if the database connection cannot be established.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.url)
            .await?;
        Ok(Self { pool })
    }

    /// Creates the trades table and its query index if they do not exist.
    ///
    /// # Errors
    /// Returns an error if schema creation fails.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS trades (
                id BIGSERIAL PRIMARY KEY,
                market_id TEXT NOT NULL,
                account_id TEXT NOT NULL,
                action TEXT NOT NULL,
                price NUMERIC NOT NULL,
                base_volume NUMERIC NOT NULL,
                quote_volume NUMERIC NOT NULL,
                traded_at TIMESTAMPTZ NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS idx_trades_market_action_day
            ON trades (market_id, action, traded_at)
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
