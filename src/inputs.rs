use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::warn;

use crate::types::TipError;

/// Parses a plain decimal number such as `42.50` or `1e2`.
///
/// Only ASCII digits, a sign, a decimal point and an exponent marker are
/// accepted, so digit separators like `1_000` are rejected.
pub fn parse_decimal(text: &str) -> Result<Decimal, TipError> {
    let trimmed = text.trim();
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E');
    if trimmed.is_empty() || !trimmed.chars().all(allowed) {
        return Err(TipError::numeric_parse(text));
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| TipError::numeric_parse(text))
}

/// Reads the bill amount typed by the user.
///
/// Empty or unparsable text yields zero. Negative amounts are clamped to zero.
pub fn parse_bill_amount(text: &str) -> Decimal {
    match parse_decimal(text) {
        Ok(amount) if amount < Decimal::ZERO => {
            warn!(input = text, "Negative bill amount, treating as 0");
            Decimal::ZERO
        }
        Ok(amount) => amount,
        Err(e) => {
            if !text.trim().is_empty() {
                warn!(error = %e.with_source("bill_amount"), "Invalid bill amount, treating as 0");
            }
            Decimal::ZERO
        }
    }
}

/// Strictly parses the number of people sharing the bill.
///
/// Only an integer is accepted; zero and negative values parse successfully
/// and are left for the caller to interpret.
pub fn parse_party_size(text: &str) -> Result<i64, TipError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| TipError::numeric_parse(text).with_source("party_size"))
}
