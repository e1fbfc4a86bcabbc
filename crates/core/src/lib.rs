//! Core domain types, ports, and configuration for the volguard trading
//! bot.
//!
//! This crate provides:
//! - Market identity types (assets, pairs, trade direction)
//! - Daily volume accounting snapshots
//! - The candidate-order abstraction filters operate on
//! - Ports between the filter layer, the volume store, and the strategy
//!   loop

pub mod config;
pub mod config_loader;
pub mod errors;
pub mod market;
pub mod order;
pub mod traits;
pub mod volume;

pub use config::{AppConfig, DatabaseConfig, VenueConfig};
pub use config_loader::ConfigLoader;
pub use errors::{QueryBuildError, VolumeQueryError};
pub use market::{Asset, TradeAction, TradingPair, VolumeUnit};
pub use order::SellOffer;
pub use traits::{DailyVolumeSource, OrderFilter, VolumeQueryBuilder};
pub use volume::VolumeSnapshot;
