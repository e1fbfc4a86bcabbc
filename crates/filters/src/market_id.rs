//! Market identity resolution.
//!
//! The daily volume ledger is keyed by short market ids. For the active
//! venue/pair the id is derived by hashing, so every process arrives at
//! the same id without coordination; operators may widen a filter's
//! scope with additional ids of their own.

use sha2::{Digest, Sha256};

/// Hex width of a resolved market id.
const MARKET_ID_LEN: usize = 10;

/// Derives the stable market id for a (venue, base, quote) triple.
///
/// SHA-256 of the slash-delimited triple, truncated to 10 hex
/// characters. Deterministic across runs and platforms.
#[must_use]
pub fn resolve_market_id(venue_name: &str, base_code: &str, quote_code: &str) -> String {
    let digest = Sha256::digest(format!("{venue_name}/{base_code}/{quote_code}"));
    hex::encode(digest)[..MARKET_ID_LEN].to_string()
}

/// Ordered set union of the default market id and operator-supplied ids.
///
/// The default id always comes first; duplicates (including duplicates
/// of the default) are removed and first-seen order is preserved.
#[must_use]
pub fn merge_market_ids(default_id: &str, extra: &[String]) -> Vec<String> {
    let mut merged = vec![default_id.to_string()];
    for id in extra {
        if !merged.iter().any(|seen| seen == id) {
            merged.push(id.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn resolve_is_stable_across_calls() {
        assert_eq!(resolve_market_id("sdex", "XLM", "USD"), "94e969874b");
        assert_eq!(resolve_market_id("sdex", "XLM", "USD"), "94e969874b");
        assert_eq!(resolve_market_id("kraken", "XLM", "USD"), "628755cb32");
        assert_eq!(resolve_market_id("binance", "BTC", "USDT"), "4f1ac4a72e");
    }

    #[test]
    fn resolve_distinguishes_base_from_quote() {
        let forward = resolve_market_id("sdex", "XLM", "USD");
        let reversed = resolve_market_id("sdex", "USD", "XLM");
        assert_ne!(forward, reversed);
    }

    #[test]
    fn resolve_yields_fixed_width_lowercase_hex() {
        let id = resolve_market_id("sdex", "XLM", "USD");
        assert_eq!(id.len(), 10);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn merge_keeps_default_first() {
        let merged = merge_market_ids("default", &ids(&["a", "b"]));
        assert_eq!(merged, ids(&["default", "a", "b"]));
    }

    #[test]
    fn merge_with_no_extras_is_just_the_default() {
        let merged = merge_market_ids("default", &[]);
        assert_eq!(merged, ids(&["default"]));
    }

    #[test]
    fn merge_removes_duplicates_preserving_first_seen_order() {
        let merged = merge_market_ids("default", &ids(&["b", "b", "a", "default", "b"]));
        assert_eq!(merged, ids(&["default", "b", "a"]));
    }

    #[test]
    fn merge_is_idempotent_under_remerging() {
        let once = merge_market_ids("default", &ids(&["a", "b", "a"]));
        let twice = merge_market_ids("default", &once);
        assert_eq!(once, twice);
    }
}
