//! Logging utilities.
//!
//! This module provides utilities for setting up logging for binaries and
//! tests that embed this crate. It uses the `tracing_subscriber` crate to
//! configure the logging; records emitted through the `log` facade are
//! bridged into the subscriber.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Setup logging with a filter taken from the environment, defaulting to INFO.
pub fn setup_logging() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	let subscriber = tracing_subscriber::registry()
		.with(filter)
		.with(fmt::layer().with_writer(std::io::stdout).compact());

	// Try to set the subscriber, but don't panic if it fails
	let _ = subscriber.try_init();
}
