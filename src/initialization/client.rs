//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::{Config, TCP_CONNECT_TIMEOUT_SECS};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client shared by all virtual users.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from config
/// - Request timeout from config and a fixed connect timeout
/// - No idle connection pool unless `connection_reuse` is set, so every
///   iteration opens a fresh TCP connection
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be
/// built, for example when the user agent is not a valid header value.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let mut builder = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .user_agent(config.user_agent.clone());

    if !config.connection_reuse {
        builder = builder.pool_max_idle_per_host(0);
    }

    Ok(Arc::new(builder.build()?))
}
