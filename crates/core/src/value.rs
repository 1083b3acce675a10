//! Numeric comparison of stored values
//!
//! Values are stored as strings. The compare-and-* family compares the
//! current value against an integer, so the stored text must parse as an
//! `i64`. Leading/trailing whitespace is not accepted: `" 10"` is not `10`.

use crate::error::{Error, Result};

/// Parse a stored value as an integer
///
/// `key` and `field` only feed the error message.
pub fn parse_integer(key: &str, field: &str, value: &str) -> Result<i64> {
    value.parse::<i64>().map_err(|_| Error::NonNumericValue {
        key: key.to_string(),
        field: field.to_string(),
        value: value.to_string(),
    })
}

/// Check whether a stored value numerically equals `expected`
///
/// `"010"` and `"+10"` both equal `10`. A value that does not parse is an
/// error, not a mismatch.
pub fn matches_expected(key: &str, field: &str, value: &str, expected: i64) -> Result<bool> {
    Ok(parse_integer(key, field, value)? == expected)
}
