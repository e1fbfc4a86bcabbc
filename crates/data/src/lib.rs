//! Data storage and daily volume aggregation for the volguard trading
//! bot.
//!
//! This crate provides:
//! - Database client for `PostgreSQL`
//! - The trade-fill model feeding the daily volume ledger
//! - The scoped daily-volume aggregation query consumed by the filter
//!   layer

pub mod database;
pub mod models;
pub mod repositories;

pub use database::DatabaseClient;
pub use models::TradeRecord;
pub use repositories::{DailyVolumeQuery, DailyVolumeRepository};
