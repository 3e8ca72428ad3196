//! Run resource initialization.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use log::info;
use tokio_util::sync::CancellationToken;

use crate::app::validate_target;
use crate::config::{Config, DEFAULT_ITERATIONS};
use crate::error_handling::{ConfigError, FailureStats};
use crate::initialization::init_client;
use crate::metrics::{CheckCounters, TimingStats};

use super::resources::{RunContext, RunResources};
use super::schedule::IterationScheduler;

/// Initialize all resources needed for a run.
///
/// 1. Validate configuration and the target URL
/// 2. Build the HTTP client
/// 3. Create the shared counters and the iteration scheduler
///
/// Nothing is sent to the target here.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the HTTP client cannot
/// be built.
pub fn init_run_resources(config: Config) -> Result<RunResources> {
    config
        .validate()
        .context("Configuration validation failed")?;
    let host = config.host.as_deref().ok_or(ConfigError::MissingHost)?;
    let target = validate_target(host).context("Configuration validation failed")?;

    let client = init_client(&config).context("Failed to initialize HTTP client")?;

    // Without an explicit budget or deadline a run is a single iteration
    let limit = match (config.iterations, config.duration_seconds) {
        (None, None) => Some(DEFAULT_ITERATIONS),
        (iterations, _) => iterations,
    };

    // Taken before the scheduler computes its deadline
    let start_time = Instant::now();
    let cancel = CancellationToken::new();
    let scheduler = Arc::new(IterationScheduler::new(
        limit,
        config.duration(),
        cancel.clone(),
    ));

    let samples = config
        .samples_csv
        .as_ref()
        .map(|_| Arc::new(Mutex::new(Vec::new())));

    let ctx = Arc::new(RunContext {
        client,
        target,
        connection_reuse: config.connection_reuse,
        checks: Arc::new(CheckCounters::new()),
        timing: Arc::new(TimingStats::new()),
        failures: Arc::new(FailureStats::new()),
        samples,
    });

    info!(
        "Target: {} (vus={}, iterations={}, duration={}, connection reuse {})",
        ctx.target,
        config.vus,
        limit.map_or_else(|| "-".to_string(), |n| n.to_string()),
        config
            .duration_seconds
            .map_or_else(|| "-".to_string(), |s| format!("{s}s")),
        if config.connection_reuse {
            "enabled"
        } else {
            "disabled"
        }
    );

    Ok(RunResources {
        ctx,
        scheduler,
        cancel,
        started_at: Utc::now().to_rfc3339(),
        start_time,
        config,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_requires_host() {
        let result = init_run_resources(Config::default());
        let err = result.err().expect("missing host must fail");
        assert!(format!("{err:#}").contains("HOST"));
    }

    #[test]
    fn test_init_rejects_invalid_host() {
        let config = Config {
            host: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        assert!(init_run_resources(config).is_err());
    }

    #[test]
    fn test_init_defaults_to_one_iteration() {
        let config = Config {
            host: Some("http://127.0.0.1:9".to_string()),
            ..Default::default()
        };
        let resources = init_run_resources(config).unwrap();
        assert_eq!(resources.scheduler.limit(), Some(1));
        assert!(resources.ctx.samples.is_none());
        assert!(!resources.ctx.connection_reuse);
    }

    #[test]
    fn test_init_duration_only_has_no_limit() {
        let config = Config {
            host: Some("http://127.0.0.1:9".to_string()),
            duration_seconds: Some(5),
            samples_csv: Some("samples.csv".into()),
            ..Default::default()
        };
        let resources = init_run_resources(config).unwrap();
        assert_eq!(resources.scheduler.limit(), None);
        assert!(resources.ctx.samples.is_some());
    }
}
