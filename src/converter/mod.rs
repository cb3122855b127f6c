//! Conversion between human readable data size strings and byte counts.
//!
//! Handles size strings like `"4567G"`, `"128M"` or `"512"`: a decimal
//! quantity followed by an optional power-of-1024 unit letter, following
//! the convention of unix utilities like `du` and `ls` with the `-h`
//! option. The reverse direction formats a byte count using the largest
//! unit in which the value is still at least one.
//!
//! The parse path evaluates the quantity with exact decimal arithmetic
//! rather than native floating point, so large literals do not lose
//! precision before truncation.

mod error;
pub mod serde_str;

pub use error::ConversionError;

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use std::{collections::HashMap, str::FromStr};

/// Sentinel returned by [`to_bytes`] for absent or malformed input.
///
/// Not a real size: callers must treat it as a distinguished "unknown"
/// marker.
pub const INVALID_SIZE: i64 = -1;

const KB: i64 = 1024;
const MB: i64 = 1024 * KB;
const GB: i64 = 1024 * MB;
const TB: i64 = 1024 * GB;

lazy_static! {
	// Quantity with an optional single unit letter, anchored at both ends.
	// An optional trailing 'B' is accepted so that the output of
	// `from_bytes` ("1.5KB") and plain byte suffixes ("512B") parse too.
	static ref SIZE_PATTERN: Regex =
		Regex::new(r"(?i)^(\d+(?:\.\d+)?)([TGMK])?B?$").expect("size pattern is valid");

	/// Multipliers for the supported power-of-1024 unit symbols.
	static ref MULTIPLIER: HashMap<&'static str, i64> = HashMap::from([
		("B", 1),
		("K", KB),
		("M", MB),
		("G", GB),
		("T", TB),
	]);
}

/// Parses a human readable data size into an exact byte count.
///
/// The unit letter is matched case-insensitively and defaults to bytes
/// when absent. The quantity is multiplied with exact decimal arithmetic
/// and truncated towards zero, so fractional bytes are dropped rather
/// than rounded.
///
/// # Errors
/// Returns [`ConversionError::UnparseableInput`] if the input does not
/// match the expected number-plus-unit shape, and
/// [`ConversionError::OutOfRange`] if the resulting byte count does not
/// fit in an `i64`.
pub fn parse_bytes(value: &str) -> Result<i64, ConversionError> {
	let captures = SIZE_PATTERN
		.captures(value)
		.ok_or_else(|| ConversionError::unparseable_input(value))?;

	let quantity = captures
		.get(1)
		.map(|m| m.as_str())
		.ok_or_else(|| ConversionError::unparseable_input(value))?;
	let unit = captures
		.get(2)
		.map_or_else(|| "B".to_string(), |m| m.as_str().to_uppercase());

	let multiplier = MULTIPLIER
		.get(unit.as_str())
		.copied()
		.ok_or_else(|| ConversionError::unparseable_input(value))?;

	let quantity =
		Decimal::from_str(quantity).map_err(|_| ConversionError::unparseable_input(value))?;

	quantity
		.checked_mul(Decimal::from(multiplier))
		.and_then(|bytes| bytes.trunc().to_i64())
		.ok_or_else(|| ConversionError::out_of_range(value))
}

/// Converts a human readable data size to bytes, returning [`INVALID_SIZE`]
/// (`-1`) for absent input, malformed input, or a quantity that does not
/// fit in an `i64`.
///
/// This is the sentinel-style counterpart of [`parse_bytes`] for callers
/// that expect the classic `-1` contract. It never panics.
pub fn to_bytes(value: Option<&str>) -> i64 {
	match value {
		Some(value) => parse_bytes(value).unwrap_or(INVALID_SIZE),
		None => INVALID_SIZE,
	}
}

/// Formats a byte count as a human readable string, e.g. `"1023B"`,
/// `"1.5KB"`, `"2.34GB"`.
///
/// Selects the largest unit in which the value is still at least one.
/// Values below 1KB are rendered literally with a `B` suffix; scaled
/// values are rendered with at most two digits after the decimal point,
/// trailing zeros dropped. Midpoints round half to even, the
/// `rust_decimal` default.
///
/// Negative input falls into the first branch and is rendered literally
/// (`-5` becomes `"-5B"`).
pub fn from_bytes(bytes: i64) -> String {
	if bytes < KB {
		format!("{}B", bytes)
	} else if bytes < MB {
		format!("{}KB", scale(bytes, KB))
	} else if bytes < GB {
		format!("{}MB", scale(bytes, MB))
	} else if bytes < TB {
		format!("{}GB", scale(bytes, GB))
	} else {
		format!("{}TB", scale(bytes, TB))
	}
}

/// Divides a byte count by a unit multiplier, keeping at most two digits
/// after the decimal point and no trailing zeros.
fn scale(bytes: i64, multiplier: i64) -> Decimal {
	(Decimal::from(bytes) / Decimal::from(multiplier))
		.round_dp(2)
		.normalize()
}
