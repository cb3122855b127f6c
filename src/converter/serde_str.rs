//! Serde support for human readable data size fields.
//!
//! Lets configuration structs hold byte counts while the file format
//! carries size strings:
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct StorageConfig {
//!     #[serde(with = "datasize::converter::serde_str")]
//!     max_segment_size: i64,
//! }
//! ```
//!
//! Deserialization accepts anything [`parse_bytes`](super::parse_bytes)
//! accepts. Serialization renders the compact [`from_bytes`](super::from_bytes)
//! form, which is lossy below its two-decimal resolution; it is intended
//! for configurations where the human readable form is authoritative.

use serde::{de, Deserialize, Deserializer, Serializer};

use super::{from_bytes, parse_bytes};

pub fn serialize<S>(bytes: &i64, serializer: S) -> Result<S::Ok, S::Error>
where
	S: Serializer,
{
	serializer.serialize_str(&from_bytes(*bytes))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
	D: Deserializer<'de>,
{
	let value = String::deserialize(deserializer)?;
	parse_bytes(&value).map_err(de::Error::custom)
}
