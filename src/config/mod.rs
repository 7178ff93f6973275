//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (Earth radius, limits, defaults)
//! - Logging option types
//! - Library configuration and CLI option parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Command, Config, LogFormat, LogLevel, Opt};
