//! Error kinds shared between the filter layer and the volume store.

use thiserror::Error;

/// Failure to bind a daily-volume query to a scope.
#[derive(Debug, Error)]
pub enum QueryBuildError {
    /// Every filter scope includes at least the resolved default market
    /// id, so an empty list means the caller skipped scope resolution.
    #[error("daily volume query requires at least one market id")]
    EmptyMarketIds,
}

/// Failure while executing a bound daily-volume query.
#[derive(Debug, Error)]
pub enum VolumeQueryError {
    #[error("daily volume query failed")]
    Store(#[source] anyhow::Error),
}

impl VolumeQueryError {
    pub fn store(err: impl Into<anyhow::Error>) -> Self {
        Self::Store(err.into())
    }
}
