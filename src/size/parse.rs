use once_cell::sync::Lazy;
use regex::Regex;

use super::constants::SIZE_PATTERN;
use super::unit::Unit;
use crate::{Error, Result};

static SIZE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(SIZE_PATTERN).expect("size pattern is valid"));

/// Parses a size string (e.g. `"10MB"`, `"1.5 GB"`) and returns the size in bytes.
///
/// If no suffix is given, bytes are assumed. A suffix must be one of `B`,
/// `KB`, `MB`, `GB`, `TB` or `PB` (case-insensitive), and the `B` is
/// optional, so `1K == 1KB`. Whitespace between the number and the suffix is
/// allowed but not required. Fractional results are truncated toward zero.
///
/// # Errors
///
/// * [`Error::InvalidSize`] if the input is not a plain decimal number
///   followed by an optional suffix.
/// * [`Error::InvalidSizeSuffix`] if the suffix is not a known unit.
///
/// ```rust
/// use binsize::parse_size;
///
/// assert_eq!(parse_size("1.5 KB").unwrap(), 1536);
/// assert_eq!(parse_size("2m").unwrap(), 2 * 1024 * 1024);
/// assert!(parse_size("-1KB").is_err());
/// ```
#[tracing::instrument(level = "trace")]
pub fn parse_size(input: &str) -> Result<i64> {
    let Some(captures) = SIZE_REGEX.captures(input) else {
        tracing::debug!(input, "rejected size: does not match size grammar");
        return Err(Error::invalid_size(input));
    };

    let (Some(number), Some(suffix)) = (captures.get(1), captures.get(2)) else {
        tracing::debug!(input, "rejected size: missing number or suffix group");
        return Err(Error::invalid_size(input));
    };
    let (number, suffix) = (number.as_str(), suffix.as_str());

    let value: f64 = number.parse().map_err(|_| {
        tracing::debug!(input, number, "rejected size: number is not a valid float");
        Error::invalid_size(input)
    })?;

    let unit = Unit::from_suffix(suffix).ok_or_else(|| {
        tracing::debug!(input, suffix, "rejected size: unknown unit suffix");
        Error::invalid_suffix(suffix)
    })?;

    // `as` truncates toward zero and saturates at the i64 bounds
    let bytes = (value * unit.multiplier().bytes() as f64) as i64;
    tracing::trace!(input, %unit, bytes, "parsed size");
    Ok(bytes)
}
