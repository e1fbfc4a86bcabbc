//! Daily volume-cap filter.
//!
//! Before a candidate sell offer is submitted, the filter checks that
//! cumulative traded volume for the pair stays under the configured
//! daily cap. Two ledgers are reconciled per evaluation: on-the-books
//! (OTB) volume the venue has already recorded, fetched fresh from the
//! aggregation store, and to-be-booked (TBB) volume committed by this
//! run but not yet visible in venue history. The offer is passed
//! unchanged, shrunk to fit remaining capacity, or dropped.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use volguard_core::{
    Asset, DailyVolumeSource, OrderFilter, SellOffer, TradeAction, TradingPair,
    VolumeQueryBuilder, VolumeSnapshot, VolumeUnit,
};

use crate::config::{LimitParameters, VolumeFilterConfig, VolumeFilterMode};
use crate::error::VolumeFilterError;
use crate::market_id::{merge_market_ids, resolve_market_id};

/// Fractional digits the venue accepts on offer amounts.
pub const VENUE_AMOUNT_DECIMALS: u32 = 7;

/// A constructed volume filter: validated config, resolved aggregation
/// scope, the bound daily-volume query, and the run-scoped TBB ledger.
pub struct VolumeFilter {
    name: String,
    config_value: String,
    display_pair: String,
    base_asset: Asset,
    quote_asset: Asset,
    config: VolumeFilterConfig,
    volume_query: Box<dyn DailyVolumeSource>,
    tbb: VolumeSnapshot,
}

/// Builds a volume filter for one venue/pair.
///
/// Resolves the default market id from the venue-native asset codes,
/// rewrites the config's market id set to start with it, and binds the
/// daily-volume query to the final scope.
///
/// # Errors
/// Returns `Config` when the caps are contradictory and `QueryBuild`
/// when the volume query cannot be bound to the scope.
pub fn make_volume_filter<F>(
    config_value: &str,
    venue_name: &str,
    pair: &TradingPair,
    asset_display: F,
    base_asset: &Asset,
    quote_asset: &Asset,
    query_builder: &dyn VolumeQueryBuilder,
    config: VolumeFilterConfig,
) -> Result<VolumeFilter, VolumeFilterError>
where
    F: Fn(&Asset) -> String,
{
    config.validate()?;

    let default_id = resolve_market_id(venue_name, base_asset.as_str(), quote_asset.as_str());
    let market_ids = merge_market_ids(&default_id, &config.market_ids);
    let config = VolumeFilterConfig { market_ids, ..config };

    let volume_query =
        query_builder.build(&config.market_ids, &config.account_ids, config.action)?;

    let filter = VolumeFilter {
        name: "volumeFilter".to_string(),
        config_value: config_value.to_string(),
        display_pair: format!(
            "{}/{}",
            asset_display(&pair.base),
            asset_display(&pair.quote)
        ),
        base_asset: base_asset.clone(),
        quote_asset: quote_asset.clone(),
        config,
        volume_query,
        tbb: VolumeSnapshot::zero(),
    };
    debug!(filter = %filter, "constructed volume filter");

    Ok(filter)
}

impl VolumeFilter {
    /// Evaluates one candidate offer against today's volume.
    ///
    /// Fetches OTB from the bound query, then decides against the cap
    /// and this run's TBB ledger. Only a kept (full or shrunk) offer
    /// updates TBB; drops and errors leave it untouched.
    ///
    /// # Errors
    /// `NotImplemented` for buy-direction configs, `Query` when the
    /// store fails, `MalformedOrder` when the offer does not parse.
    pub async fn apply_offer(
        &mut self,
        offer: Option<SellOffer>,
    ) -> Result<Option<SellOffer>, VolumeFilterError> {
        if self.config.action != TradeAction::Sell {
            return Err(VolumeFilterError::NotImplemented(self.config.action));
        }

        let today = Utc::now().date_naive();
        let otb = self.volume_query.daily_volume(today).await?;
        let limits = self.config.limit_parameters();

        evaluate(
            &otb,
            &mut self.tbb,
            offer,
            &self.base_asset,
            &self.quote_asset,
            &limits,
        )
    }

    /// Zeroes the to-be-booked ledger at the start of a new run.
    pub fn reset_daily_tracking(&mut self) {
        self.tbb = VolumeSnapshot::zero();
    }

    #[must_use]
    pub fn config(&self) -> &VolumeFilterConfig {
        &self.config
    }

    #[must_use]
    pub fn tbb(&self) -> &VolumeSnapshot {
        &self.tbb
    }
}

#[async_trait]
impl OrderFilter for VolumeFilter {
    async fn apply(&mut self, offer: Option<SellOffer>) -> Result<Option<SellOffer>> {
        self.apply_offer(offer).await.map_err(Into::into)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for VolumeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[key={:?}, pair={}, {}]",
            self.name, self.config_value, self.display_pair, self.config
        )
    }
}

/// The pure decision function: evaluates one candidate sell offer
/// against the cap, given OTB and the mutable TBB ledger.
///
/// The cap is inclusive: a projection exactly at the cap is accepted.
/// TBB is updated only when the offer is kept, with the kept amount in
/// both units; a dropped offer or an error leaves it exactly as it was.
///
/// # Errors
/// `MalformedOrder` when price or amount is not a positive decimal.
pub fn evaluate(
    otb: &VolumeSnapshot,
    tbb: &mut VolumeSnapshot,
    offer: Option<SellOffer>,
    base_asset: &Asset,
    quote_asset: &Asset,
    limits: &LimitParameters,
) -> Result<Option<SellOffer>, VolumeFilterError> {
    let Some(offer) = offer else {
        return Ok(None);
    };

    let price = parse_positive(&offer.price, "price")?;
    let amount = parse_positive(&offer.amount, "amount")?;
    let amount_in_quote = amount * price;

    let Some((unit, cap)) = limits.governing_cap() else {
        tbb.record(amount, amount_in_quote);
        return Ok(Some(offer));
    };

    let already = otb.get(unit) + tbb.get(unit);
    let amount_in_unit = match unit {
        VolumeUnit::Base => amount,
        VolumeUnit::Quote => amount_in_quote,
    };
    let projected = already + amount_in_unit;

    if projected <= cap {
        tbb.record(amount, amount_in_quote);
        return Ok(Some(offer));
    }

    if limits.mode == VolumeFilterMode::Ignore {
        debug!(
            pair = %format_args!("{base_asset}/{quote_asset}"),
            unit = unit.as_str(),
            %cap,
            %projected,
            "projected volume over cap, dropping offer"
        );
        return Ok(None);
    }

    let remaining = cap - already;
    if remaining <= Decimal::ZERO {
        debug!(
            pair = %format_args!("{base_asset}/{quote_asset}"),
            unit = unit.as_str(),
            %cap,
            "no remaining capacity, dropping offer"
        );
        return Ok(None);
    }

    let shrunk = match unit {
        VolumeUnit::Base => remaining,
        VolumeUnit::Quote => remaining / price,
    }
    .round_dp(VENUE_AMOUNT_DECIMALS);
    if shrunk <= Decimal::ZERO {
        return Ok(None);
    }

    debug!(
        pair = %format_args!("{base_asset}/{quote_asset}"),
        unit = unit.as_str(),
        %cap,
        original = %amount,
        %shrunk,
        "shrinking offer to remaining capacity"
    );
    tbb.record(shrunk, shrunk * price);

    Ok(Some(SellOffer {
        price: offer.price,
        amount: format_venue_amount(shrunk),
    }))
}

fn parse_positive(value: &str, field: &'static str) -> Result<Decimal, VolumeFilterError> {
    match Decimal::from_str(value) {
        Ok(parsed) if parsed > Decimal::ZERO => Ok(parsed),
        _ => Err(VolumeFilterError::MalformedOrder {
            field,
            value: value.to_string(),
        }),
    }
}

fn format_venue_amount(amount: Decimal) -> String {
    format!("{amount:.prec$}", prec = VENUE_AMOUNT_DECIMALS as usize)
}
