//! Configuration types.
//!
//! This module defines the enums and the library `Config` struct used to
//! describe a load run.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_VUS};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use status_gate::Config;
///
/// let config = Config {
///     host: Some("http://127.0.0.1:8080/".to_string()),
///     vus: 50,
///     duration_seconds: Some(30),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Target URL (`HOST`)
    pub host: Option<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Number of concurrent virtual users
    pub vus: usize,

    /// Total iterations shared across all virtual users
    pub iterations: Option<u64>,

    /// Run duration in seconds
    pub duration_seconds: Option<u64>,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// Keep connections alive between iterations (disabled by default)
    pub connection_reuse: bool,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Write the JSON run summary here
    pub summary_export: Option<PathBuf>,

    /// Write one CSV row per iteration here
    pub samples_csv: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            vus: DEFAULT_VUS,
            iterations: None,
            duration_seconds: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            connection_reuse: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            summary_export: None,
            samples_csv: None,
        }
    }
}

impl Config {
    /// Checks the settings that can be wrong before anything is started.
    ///
    /// The target URL itself is checked by [`crate::app::validate_target`].
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.host.as_deref().map(str::trim) {
            None | Some("") => return Err(ConfigError::MissingHost),
            Some(_) => {}
        }
        if self.vus == 0 {
            return Err(ConfigError::ZeroVus);
        }
        if self.iterations == Some(0) {
            return Err(ConfigError::ZeroIterations);
        }
        if self.duration_seconds == Some(0) {
            return Err(ConfigError::ZeroDuration);
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Run duration, if one was configured.
    pub fn duration(&self) -> Option<Duration> {
        self.duration_seconds.map(Duration::from_secs)
    }
}
