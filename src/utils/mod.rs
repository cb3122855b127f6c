//! Utility modules for common functionality.
//!
//! Currently includes:
//!
//! - logging: Utilities for setting up and configuring logging

mod logging;

pub use logging::*;
