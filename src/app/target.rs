//! Target URL validation.

use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::ConfigError;

/// Validates and normalizes the `HOST` value.
///
/// Adds an `http://` prefix if no scheme is given, then checks that the URL
/// parses, uses http or https, and is no longer than `MAX_URL_LENGTH`.
///
/// # Errors
///
/// Returns `ConfigError::MissingHost` for an empty value and
/// `ConfigError::InvalidHost` for anything else that is not a usable URL.
pub fn validate_target(host: &str) -> Result<Url, ConfigError> {
    let trimmed = host.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingHost);
    }

    let invalid = |reason: &str| ConfigError::InvalidHost {
        host: trimmed.to_string(),
        reason: reason.to_string(),
    };

    let normalized = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };

    if normalized.len() > MAX_URL_LENGTH {
        return Err(invalid(&format!(
            "longer than {MAX_URL_LENGTH} characters"
        )));
    }

    let parsed = Url::parse(&normalized).map_err(|e| invalid(&e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(&format!("unsupported scheme {other:?}"))),
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host"));
    }

    Ok(parsed)
}
