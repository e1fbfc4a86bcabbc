//! Data models for the volguard trading bot.
//!
//! All models use `rust_decimal::Decimal` for financial precision and
//! derive `sqlx::FromRow` for database compatibility.

pub mod trade;

pub use trade::TradeRecord;
