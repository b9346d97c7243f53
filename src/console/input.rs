//! Parsing of the values typed at the prompts.
//!
//! Failures here are [`InputError`]s and never reach the store.

use crate::model::ProductId;
use thiserror::Error;

/// A value typed at a prompt could not be parsed.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Invalid input for {field}")]
pub struct InputError {
    pub field: &'static str,
}

pub fn parse_id(raw: &str) -> Result<ProductId, InputError> {
    parse_int(raw, "ID").map(ProductId)
}

pub fn parse_quantity(raw: &str) -> Result<i64, InputError> {
    parse_int(raw, "Quantity")
}

/// Parses a price, rejecting `NaN` and infinities.
pub fn parse_price(raw: &str) -> Result<f64, InputError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or(InputError { field: "Price" })
}

/// Runs `parse` on non-blank input. Blank input means "keep the current value".
pub fn optional<T>(
    raw: &str,
    parse: impl Fn(&str) -> Result<T, InputError>,
) -> Result<Option<T>, InputError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    parse(raw).map(Some)
}

/// Blank input is absent; anything else is the new name, trimmed.
pub fn optional_name(raw: &str) -> Option<String> {
    let raw = raw.trim();
    (!raw.is_empty()).then(|| raw.to_string())
}

/// Only `yes`, in any case, confirms.
pub fn is_confirmation(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("yes")
}

fn parse_int(raw: &str, field: &'static str) -> Result<i64, InputError> {
    raw.trim().parse().map_err(|_| InputError { field })
}
