//! Numeric display formatters.
//!
//! These sit at the presentation boundary and never fail: anything that is
//! not a finite number renders as `"-"`.

use rust_decimal::{Decimal, RoundingStrategy};
use sizing_core::is_valid_number;

/// Placeholder for values that could not be computed.
pub const EMPTY: &str = "-";

/// Placeholder for optional values that do not apply.
pub const NOT_APPLICABLE: &str = "N/A";

/// Fixed-point string with `places` decimals, rounding half away from zero.
pub fn format_fixed(value: f64, places: u32) -> String {
    if !is_valid_number(value) {
        return EMPTY.to_string();
    }
    // Normalize negative zero
    let value = if value == 0.0 { 0.0 } else { value };
    let width = places as usize;

    match Decimal::try_from(value) {
        Ok(decimal) => {
            let rounded =
                decimal.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
            format!("{:.*}", width, rounded)
        }
        // Outside Decimal's range
        Err(_) => format!("{:.*}", width, value),
    }
}

/// Dollar amount with two decimals.
pub fn format_currency(value: f64) -> String {
    format_fixed(value, 2)
}

/// Share count with four decimals.
pub fn format_shares(value: f64) -> String {
    format_fixed(value, 4)
}

/// Percentage with two decimals, without the `%` sign.
pub fn format_percentage(value: f64) -> String {
    format_fixed(value, 2)
}

/// Render an optional value, using `"N/A"` when absent.
pub fn format_optional<F>(value: Option<f64>, formatter: F) -> String
where
    F: Fn(f64) -> String,
{
    value.map_or_else(|| NOT_APPLICABLE.to_string(), formatter)
}
