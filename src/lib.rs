//! Conversion between human readable data size strings and exact byte counts.
//!
//! This crate parses size strings like `"4567G"`, `"128M"` or `"512"` into
//! exact byte counts, and formats byte counts back into compact strings like
//! `"1.5MB"`. It follows the convention of unix utilities like `du` and `ls`
//! with the `-h` option: a decimal quantity followed by an optional
//! power-of-1024 unit letter.
//!
//! Two calling styles are exposed:
//! - [`parse_bytes`] returns a `Result` and reports why an input was rejected
//! - [`to_bytes`] preserves the classic contract of returning the reserved
//!   sentinel `-1` for absent or malformed input
//!
//! ```
//! use datasize::{from_bytes, to_bytes};
//!
//! assert_eq!(to_bytes(Some("128M")), 128 * 1024 * 1024);
//! assert_eq!(to_bytes(Some("not a size")), -1);
//! assert_eq!(from_bytes(1536), "1.5KB");
//! ```

pub mod converter;
pub mod utils;

pub use converter::{from_bytes, parse_bytes, to_bytes, ConversionError, INVALID_SIZE};
