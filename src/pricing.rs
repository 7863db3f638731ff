//! Pricing
//!
//! Prices are stored as integer minor units (paise, pence, cents) and only
//! become decimals at the edges: when authored prices are imported and when a
//! price is displayed.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};

/// Convert a price in major units (e.g. `899.50`) to minor units.
///
/// Returns `None` for negative prices or values that do not fit in `u64`.
/// Fractions below the currency's smallest unit are rounded half away from
/// zero.
#[must_use]
pub fn to_minor_units(major: Decimal, currency: &Currency) -> Option<u64> {
    if major.is_sign_negative() {
        return None;
    }

    let scale = Decimal::from(10_u64.checked_pow(currency.exponent)?);

    major
        .checked_mul(scale)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
}

/// Convert a minor-unit amount back to major units, e.g. `89950` paise to
/// `899.50`.
#[must_use]
pub fn to_major_units(minor: u64, currency: &Currency) -> Decimal {
    Decimal::from(minor) / Decimal::from(10_u64.pow(currency.exponent))
}

/// Format a minor-unit amount in `currency`, e.g. `₹899.00`.
#[must_use]
pub fn format_price(minor: u64, currency: &Currency) -> String {
    let minor = i64::try_from(minor).unwrap_or(i64::MAX);

    Money::from_minor(minor, currency).to_string()
}

/// Whole-number percentage saved against `original`, rounded half up.
///
/// `None` when there is no saving.
#[must_use]
pub fn discount_percentage(price: u64, original: u64) -> Option<u64> {
    if original <= price {
        return None;
    }

    let saved = Decimal::from(original - price);
    let original = Decimal::from(original);

    (saved / original * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
}
