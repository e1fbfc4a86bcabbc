//! Candidate order abstraction.
//!
//! The venue API carries offer price and amount as decimal strings; they
//! are kept as strings here and parsed by whichever layer needs to do
//! arithmetic, so a malformed value surfaces where it is consumed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate sell offer: sell `amount` of the base asset at `price`
/// quote-per-base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellOffer {
    /// Offer price as a decimal string, quote units per base unit.
    pub price: String,
    /// Offer amount as a decimal string, in base units.
    pub amount: String,
}

impl SellOffer {
    #[must_use]
    pub fn new(price: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            amount: amount.into(),
        }
    }
}

impl fmt::Display for SellOffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sell {} @ {}", self.amount, self.price)
    }
}
