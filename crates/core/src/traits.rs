use crate::errors::{QueryBuildError, VolumeQueryError};
use crate::market::TradeAction;
use crate::order::SellOffer;
use crate::volume::VolumeSnapshot;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// A daily-volume aggregation query bound to one scope.
///
/// A scope that matches no rows yields zero volumes, not an error.
#[async_trait]
pub trait DailyVolumeSource: Send + Sync {
    async fn daily_volume(&self, date: NaiveDate) -> Result<VolumeSnapshot, VolumeQueryError>;
}

/// Binds daily-volume queries to a (market ids, account ids, action)
/// scope. An empty account scope means "all accounts"; an empty market
/// scope is a build error.
pub trait VolumeQueryBuilder: Send + Sync {
    fn build(
        &self,
        market_ids: &[String],
        account_ids: &[String],
        action: TradeAction,
    ) -> Result<Box<dyn DailyVolumeSource>, QueryBuildError>;
}

/// A filter the strategy loop runs over each candidate offer before
/// submission. Filters are invoked sequentially and may carry state
/// across calls within one run.
#[async_trait]
pub trait OrderFilter: Send + Sync {
    async fn apply(&mut self, offer: Option<SellOffer>) -> Result<Option<SellOffer>>;
    fn name(&self) -> &str;
}
