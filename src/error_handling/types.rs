//! Error type definitions.
//!
//! This module defines the error enums used throughout the application and
//! the categories under which failed requests are counted.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Invalid run configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("HOST is not set; export HOST=<url> or pass --host")]
    MissingHost,

    #[error("Invalid HOST {host:?}: {reason}")]
    InvalidHost { host: String, reason: String },

    #[error("--vus must be at least 1")]
    ZeroVus,

    #[error("--iterations must be at least 1")]
    ZeroIterations,

    #[error("--duration must be at least 1 second")]
    ZeroDuration,

    #[error("--timeout-seconds must be at least 1")]
    ZeroTimeout,
}

/// Malformed input to `summarize` or `compare`.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("line {line}: row has a label but no values")]
    EmptyRow { line: usize },

    #[error("line {line}: {value:?} is not a number")]
    NotANumber { line: usize, value: String },

    #[error("line {line}: expected at least {expected} columns, found {found}")]
    MissingColumn {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: baseline average is zero")]
    ZeroBaseline { line: usize },

    #[error("stride must be at least 1")]
    ZeroStride,
}

/// Categories of failed requests.
///
/// A request that never produced a status code is counted as the `other`
/// check and additionally recorded under one of these categories. A body
/// that fails mid-read keeps its status check and is recorded here too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    HttpRequestBuilderError,
    HttpRequestRedirectError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestRequestError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
        }
    }
}
