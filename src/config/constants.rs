//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including status codes, timeouts and run defaults.

/// Status code counted as `accepted`.
pub const STATUS_ACCEPTED: u16 = 200;
/// Status code counted as `rejected` (the server shed the request).
pub const STATUS_REJECTED: u16 = 503;

/// Default number of virtual users
pub const DEFAULT_VUS: usize = 1;
/// Iterations performed when neither `--iterations` nor `--duration` is given
pub const DEFAULT_ITERATIONS: u64 = 1;

// Network operation timeouts
/// Per-request timeout in seconds
/// Matches the 60s request timeout common to load-testing tools
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Interval in seconds between progress log lines
pub const LOGGING_INTERVAL: u64 = 5;

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Maximum target URL length (2048 characters).
/// This matches common browser and server limits.
pub const MAX_URL_LENGTH: usize = 2048;

/// Default row stride for `compare` (first row, then every 10th)
pub const DEFAULT_COMPARE_STRIDE: usize = 10;
