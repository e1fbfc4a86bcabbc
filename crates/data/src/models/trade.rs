//! Trade fill data model.
//!
//! One row per venue fill; the daily volume ledger is an aggregation
//! over these rows.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use volguard_core::TradeAction;

/// A recorded venue fill.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct TradeRecord {
    /// Auto-generated row ID
    pub id: i64,
    /// Market identifier the fill is scoped to (see the market identity
    /// resolver in the filter layer)
    pub market_id: String,
    /// Venue account the fill belongs to
    pub account_id: String,
    /// Trade direction: "buy" or "sell"
    pub action: String,
    /// Fill price, quote units per base unit
    pub price: Decimal,
    /// Filled amount in base units
    pub base_volume: Decimal,
    /// Filled amount in quote units (base_volume * price)
    pub quote_volume: Decimal,
    /// Timestamp of the fill
    pub traded_at: DateTime<Utc>,
}

impl TradeRecord {
    /// Creates a new fill record; the quote volume is derived from the
    /// base volume and price.
    #[must_use]
    pub fn new(
        market_id: String,
        account_id: String,
        action: TradeAction,
        price: Decimal,
        base_volume: Decimal,
        traded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0, // Will be set by database
            market_id,
            account_id,
            action: action.as_str().to_string(),
            price,
            base_volume,
            quote_volume: base_volume * price,
            traded_at,
        }
    }

    /// Returns true if this fill sold base asset.
    #[must_use]
    pub fn is_sell(&self) -> bool {
        self.action == TradeAction::Sell.as_str()
    }
}
