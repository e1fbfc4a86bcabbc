//! Daily traded-volume accounting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::market::VolumeUnit;

/// Cumulative traded volume for one trading pair, in both units.
///
/// Used for the two halves of the daily ledger: on-the-books volume the
/// venue has already recorded, and to-be-booked volume this process has
/// committed during the current run but the venue has not yet reflected.
/// Fields are non-negative; a to-be-booked snapshot only grows within a
/// run and is reset to zero by the owning scope between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSnapshot {
    /// Volume denominated in the base asset.
    pub base: Decimal,
    /// Volume denominated in the quote asset.
    pub quote: Decimal,
}

impl VolumeSnapshot {
    #[must_use]
    pub fn new(base: Decimal, quote: Decimal) -> Self {
        Self { base, quote }
    }

    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns the volume denominated in `unit`.
    #[must_use]
    pub fn get(&self, unit: VolumeUnit) -> Decimal {
        match unit {
            VolumeUnit::Base => self.base,
            VolumeUnit::Quote => self.quote,
        }
    }

    /// Accumulates one trade's volume in both units.
    pub fn record(&mut self, base_delta: Decimal, quote_delta: Decimal) {
        self.base += base_delta;
        self.quote += quote_delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_snapshot_is_empty_in_both_units() {
        let snapshot = VolumeSnapshot::zero();
        assert_eq!(snapshot.get(VolumeUnit::Base), Decimal::ZERO);
        assert_eq!(snapshot.get(VolumeUnit::Quote), Decimal::ZERO);
    }

    #[test]
    fn record_accumulates_both_units() {
        let mut snapshot = VolumeSnapshot::zero();
        snapshot.record(dec!(1.5), dec!(3.0));
        snapshot.record(dec!(0.5), dec!(1.0));
        assert_eq!(snapshot, VolumeSnapshot::new(dec!(2.0), dec!(4.0)));
    }

    #[test]
    fn get_selects_by_unit() {
        let snapshot = VolumeSnapshot::new(dec!(2.5), dec!(7.25));
        assert_eq!(snapshot.get(VolumeUnit::Base), dec!(2.5));
        assert_eq!(snapshot.get(VolumeUnit::Quote), dec!(7.25));
    }
}
