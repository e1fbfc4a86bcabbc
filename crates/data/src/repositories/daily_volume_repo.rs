//! Daily volume repository.
//!
//! Stores venue fills and answers the scoped daily-volume aggregation
//! the filter layer compares caps against.

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use volguard_core::{
    DailyVolumeSource, QueryBuildError, TradeAction, VolumeQueryBuilder, VolumeQueryError,
    VolumeSnapshot,
};

use crate::models::TradeRecord;

const DAILY_VOLUME_SQL: &str = r"
SELECT COALESCE(SUM(base_volume), 0), COALESCE(SUM(quote_volume), 0)
FROM trades
WHERE market_id = ANY($1)
  AND action = $2
  AND DATE(traded_at AT TIME ZONE 'UTC') = $3";

/// Repository for trade fills and daily volume aggregation.
#[derive(Debug, Clone)]
pub struct DailyVolumeRepository {
    pool: PgPool,
}

impl DailyVolumeRepository {
    /// Creates a new repository instance.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserts a fill and returns the generated ID.
    ///
    /// # Errors
    /// Returns an error if the database operation fails.
    pub async fn insert(&self, record: &TradeRecord) -> Result<i64> {
        let row: (i64,) = sqlx::query_as(
            r"
            INSERT INTO trades
                (market_id, account_id, action, price, base_volume, quote_volume, traded_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(&record.market_id)
        .bind(&record.account_id)
        .bind(&record.action)
        .bind(record.price)
        .bind(record.base_volume)
        .bind(record.quote_volume)
        .bind(record.traded_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.0)
    }
}

impl VolumeQueryBuilder for DailyVolumeRepository {
    fn build(
        &self,
        market_ids: &[String],
        account_ids: &[String],
        action: TradeAction,
    ) -> Result<Box<dyn DailyVolumeSource>, QueryBuildError> {
        if market_ids.is_empty() {
            return Err(QueryBuildError::EmptyMarketIds);
        }

        debug!(
            action = action.as_str(),
            markets = market_ids.len(),
            accounts = account_ids.len(),
            "binding daily volume query"
        );

        Ok(Box::new(DailyVolumeQuery {
            pool: self.pool.clone(),
            market_ids: market_ids.to_vec(),
            account_ids: account_ids.to_vec(),
            action,
        }))
    }
}

/// A daily-volume aggregation bound to one (markets, accounts, action)
/// scope. An empty account list aggregates across all accounts.
pub struct DailyVolumeQuery {
    pool: PgPool,
    market_ids: Vec<String>,
    account_ids: Vec<String>,
    action: TradeAction,
}

impl DailyVolumeQuery {
    fn sql(&self) -> String {
        if self.account_ids.is_empty() {
            DAILY_VOLUME_SQL.to_string()
        } else {
            format!("{DAILY_VOLUME_SQL}\n  AND account_id = ANY($4)")
        }
    }
}

#[async_trait]
impl DailyVolumeSource for DailyVolumeQuery {
    async fn daily_volume(&self, date: NaiveDate) -> Result<VolumeSnapshot, VolumeQueryError> {
        let sql = self.sql();
        let mut query = sqlx::query_as::<_, (Decimal, Decimal)>(&sql)
            .bind(&self.market_ids)
            .bind(self.action.as_str())
            .bind(date);

        if !self.account_ids.is_empty() {
            query = query.bind(&self.account_ids);
        }

        let (base, quote) = query
            .fetch_one(&self.pool)
            .await
            .map_err(VolumeQueryError::store)?;

        Ok(VolumeSnapshot::new(base, quote))
    }
}
