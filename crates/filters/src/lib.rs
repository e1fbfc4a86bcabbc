//! Pre-submission order filters for the volguard trading bot.
//!
//! A filter sits between strategy output and order submission; each
//! candidate offer is passed through, shrunk to fit remaining capacity,
//! or dropped. This crate provides the daily volume-cap filter and the
//! market identity resolution its aggregation scope is built from.

pub mod config;
pub mod error;
pub mod market_id;
pub mod volume_filter;

pub use config::{LimitParameters, VolumeFilterConfig, VolumeFilterMode};
pub use error::VolumeFilterError;
pub use market_id::{merge_market_ids, resolve_market_id};
pub use volume_filter::{evaluate, make_volume_filter, VolumeFilter, VENUE_AMOUNT_DECIMALS};
