//! Currency string helpers shared by the validator, advisor, and web layer.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error returned when a string cannot be parsed as a currency amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for parsing: trims whitespace and removes commas
/// (thousands separator).
fn normalize(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a currency amount, handling input like `"1,234.56"`.
///
/// Empty input is an error here; required-field handling belongs to the
/// validator.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    normalize(s).parse().map_err(|source| ParseAmountError {
        input: s.to_string(),
        source,
    })
}

/// Formats an amount as whole dollars with a `$` sign and thousands
/// separators, e.g. `$15,000`. Fractional cents round half away from zero.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let grouped: String = grouped.chars().rev().collect();

    if rounded < Decimal::ZERO {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
