//! Error categorization.

use super::stats::FailureStats;
use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Status errors never reach this function: a response with any status code
/// is classified, not counted as a failure.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

/// Records a failed request in the statistics and returns its category.
pub fn update_error_stats(stats: &FailureStats, error: &reqwest::Error) -> ErrorType {
    let error_type = categorize_reqwest_error(error);
    stats.increment_error(error_type);
    error_type
}
