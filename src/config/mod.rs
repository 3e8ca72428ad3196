//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (status codes, timeouts, defaults)
//! - The library `Config` and its validation
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{Cli, Command, CompareCommand, RunCommand, SummarizeCommand};
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
