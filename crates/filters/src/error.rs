use thiserror::Error;
use volguard_core::{QueryBuildError, TradeAction, VolumeQueryError};

/// Errors surfaced by volume filter construction and evaluation.
///
/// Construction fails on contradictory configuration or an unbindable
/// query scope; evaluation fails on store errors or unparseable offers.
/// An evaluation error never leaves partial bookkeeping behind.
#[derive(Debug, Error)]
pub enum VolumeFilterError {
    #[error("invalid volume filter config: {0}")]
    Config(String),

    #[error(transparent)]
    QueryBuild(#[from] QueryBuildError),

    #[error(transparent)]
    Query(#[from] VolumeQueryError),

    #[error("order {field} {value:?} is not a positive decimal")]
    MalformedOrder { field: &'static str, value: String },

    #[error("volume filtering for {0} flow is not implemented")]
    NotImplemented(TradeAction),
}
