//! Application configuration and constants.
//!
//! This module provides:
//! - Default paths and special field names
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, Opt};
