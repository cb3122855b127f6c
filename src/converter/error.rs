//! Conversion error types and handling.
//!
//! Provides error types for data size conversion operations,
//! distinguishing malformed input from quantities that do not fit
//! in a 64-bit byte count.

use log::error;
use std::{error::Error, fmt};

/// Represents possible errors during data size conversion
#[derive(Debug)]
pub enum ConversionError {
	/// When the input does not match the expected number-plus-unit shape
	UnparseableInput(String),
	/// When the parsed quantity does not fit in a signed 64-bit byte count
	OutOfRange(String),
}

impl ConversionError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			ConversionError::UnparseableInput(value) => {
				format!("Unparseable data size: {}", value)
			}
			ConversionError::OutOfRange(value) => {
				format!("Data size out of range: {}", value)
			}
		}
	}

	/// Creates a new unparseable input error with logging
	pub fn unparseable_input(value: impl Into<String>) -> Self {
		let error = ConversionError::UnparseableInput(value.into());
		error!("{}", error.format_message());
		error
	}

	/// Creates a new out of range error with logging
	pub fn out_of_range(value: impl Into<String>) -> Self {
		let error = ConversionError::OutOfRange(value.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConversionError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConversionError {}
