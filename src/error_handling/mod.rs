//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, configuration, analysis)
//! - Failure statistics tracking for requests that produced no response
//! - Error type extraction from `reqwest` errors

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, update_error_stats};
pub use stats::FailureStats;
pub use types::{AnalysisError, ConfigError, ErrorType, InitializationError};
