//! Database repositories for the volguard trading bot.
//!
//! Each repository provides typed access to a specific table; the daily
//! volume repository also binds the scoped aggregation queries the
//! filter layer consumes.

pub mod daily_volume_repo;

pub use daily_volume_repo::{DailyVolumeQuery, DailyVolumeRepository};
