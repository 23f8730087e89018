//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating claims that survive a trip
//! through the JSON wire format.

use chrono::{Duration, NaiveDate};
use domain_claims::Claim;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for well-formed HTS codes (`xxxx.xx.xx.xx`)
pub fn hts_code_strategy() -> impl Strategy<Value = String> {
    (0u32..10_000, 0u32..100, 0u32..100, 0u32..100)
        .prop_map(|(a, b, c, d)| format!("{a:04}.{b:02}.{c:02}.{d:02}"))
}

/// Strategy for import dates between 2000 and roughly 2054
pub fn import_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|days| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(days)
    })
}

/// Strategy for amounts with two decimal places
///
/// Bounded so the value is exactly representable after the JSON number
/// round trip.
pub fn amount_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for importer names
pub fn importer_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9 &.,-]{0,40}"
}

/// Strategy for complete claims
pub fn claim_strategy() -> impl Strategy<Value = Claim> {
    (
        any::<i32>(),
        importer_name_strategy(),
        hts_code_strategy(),
        import_date_strategy(),
        0i64..1_000_000,
        amount_strategy(),
        amount_strategy(),
    )
        .prop_map(
            |(claim_id, importer_name, hts_code, import_date, quantity, duties, drawback)| {
                Claim::new(
                    i64::from(claim_id),
                    importer_name,
                    hts_code,
                    import_date,
                    quantity,
                    duties,
                    drawback,
                )
            },
        )
}

/// Strategy for short lists of claims
pub fn claim_list_strategy(max_len: usize) -> impl Strategy<Value = Vec<Claim>> {
    prop::collection::vec(claim_strategy(), 0..=max_len)
}
