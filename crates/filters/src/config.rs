//! Volume filter configuration.

use anyhow::bail;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use volguard_core::{TradeAction, VolumeUnit};

use crate::error::VolumeFilterError;

/// Enforcement policy when an offer would push volume over the cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeFilterMode {
    /// Shrink the offer to fit remaining capacity; drop only when no
    /// capacity remains.
    Exact,
    /// Drop any offer that would exceed the cap, never shrink.
    Ignore,
}

impl VolumeFilterMode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VolumeFilterMode::Exact => "exact",
            VolumeFilterMode::Ignore => "ignore",
        }
    }
}

impl fmt::Display for VolumeFilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VolumeFilterMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(VolumeFilterMode::Exact),
            "ignore" => Ok(VolumeFilterMode::Ignore),
            other => bail!("unknown volume filter mode: {other:?}"),
        }
    }
}

/// Operator configuration for one volume filter: which direction and
/// unit the cap governs, its magnitude, the enforcement mode, and the
/// market/account scope volume is aggregated over.
///
/// Immutable once the filter is constructed; the factory rewrites
/// `market_ids` to start with the resolved default id for the active
/// venue and pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeFilterConfig {
    /// Daily sell cap denominated in the base asset.
    pub sell_cap_in_base: Option<Decimal>,
    /// Daily sell cap denominated in the quote asset.
    pub sell_cap_in_quote: Option<Decimal>,
    /// Trade direction the cap governs.
    pub action: TradeAction,
    /// Enforcement policy when an offer would exceed the cap.
    pub mode: VolumeFilterMode,
    /// Market ids volume is aggregated over (insertion-ordered,
    /// deduplicated).
    pub market_ids: Vec<String>,
    /// Venue accounts volume is aggregated over; empty means all
    /// accounts.
    pub account_ids: Vec<String>,
}

impl VolumeFilterConfig {
    /// Creates a sell-direction config.
    #[must_use]
    pub fn new(
        sell_cap_in_base: Option<Decimal>,
        sell_cap_in_quote: Option<Decimal>,
        mode: VolumeFilterMode,
        market_ids: Vec<String>,
        account_ids: Vec<String>,
    ) -> Self {
        Self {
            sell_cap_in_base,
            sell_cap_in_quote,
            action: TradeAction::Sell,
            mode,
            market_ids,
            account_ids,
        }
    }

    /// Rejects caps in both units at once: the governing unit would be
    /// ambiguous. A config with neither cap set is accepted and passes
    /// offers through with bookkeeping only.
    ///
    /// # Errors
    /// Returns `VolumeFilterError::Config` when both caps are set.
    // TODO: confirm whether a config with neither cap set should be
    // rejected here instead of passing everything through.
    pub fn validate(&self) -> Result<(), VolumeFilterError> {
        if self.sell_cap_in_base.is_some() && self.sell_cap_in_quote.is_some() {
            return Err(VolumeFilterError::Config(
                "sell volume caps in base and quote units are mutually exclusive".to_string(),
            ));
        }
        Ok(())
    }

    /// Narrows to the parameters the decision function needs.
    #[must_use]
    pub fn limit_parameters(&self) -> LimitParameters {
        LimitParameters {
            sell_cap_in_base: self.sell_cap_in_base,
            sell_cap_in_quote: self.sell_cap_in_quote,
            mode: self.mode,
        }
    }
}

impl fmt::Display for VolumeFilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn cap(value: Option<Decimal>) -> String {
            value.map_or_else(|| "-".to_string(), |v| v.to_string())
        }

        write!(
            f,
            "action={} mode={} capBase={} capQuote={} markets={:?} accounts={:?}",
            self.action,
            self.mode,
            cap(self.sell_cap_in_base),
            cap(self.sell_cap_in_quote),
            self.market_ids,
            self.account_ids,
        )
    }
}

/// The cap view the pure decision function operates on, decoupled from
/// scope and query concerns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitParameters {
    pub sell_cap_in_base: Option<Decimal>,
    pub sell_cap_in_quote: Option<Decimal>,
    pub mode: VolumeFilterMode,
}

impl LimitParameters {
    /// The unit the active cap is denominated in, with its value, or
    /// `None` when the filter caps nothing. Construction validation
    /// guarantees at most one cap is set; base wins if both appear
    /// anyway.
    #[must_use]
    pub fn governing_cap(&self) -> Option<(VolumeUnit, Decimal)> {
        if let Some(cap) = self.sell_cap_in_base {
            return Some((VolumeUnit::Base, cap));
        }
        self.sell_cap_in_quote.map(|cap| (VolumeUnit::Quote, cap))
    }
}
