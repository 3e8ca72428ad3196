//! Load run orchestration.
//!
//! A run spawns one task per virtual user. Each task claims iterations from
//! a shared scheduler, and every iteration is one GET and one classification.
//! Progress is logged periodically and Ctrl-C stops new iterations, so the
//! run then finalizes with partial results.

mod finalize;
mod init;
mod resources;
mod schedule;
mod task;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use serde::Serialize;

use crate::app::log_progress;
use crate::config::{Config, LOGGING_INTERVAL};
use crate::metrics::{CheckSummary, TimingSummary};

pub use finalize::finalize_run;
pub use init::init_run_resources;
pub use resources::{IterationOutcome, RunContext, RunLoopResult, RunResources, Sample};
pub use schedule::IterationScheduler;
pub use task::{iteration, run_virtual_user};

/// Results of a load run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Target URL
    pub target: String,
    /// Wall-clock start (RFC 3339)
    pub started_at: String,
    /// Number of virtual users
    pub vus: usize,
    /// Whether connections were kept alive between iterations
    pub connection_reuse: bool,
    /// Completed iterations
    pub iterations: u64,
    /// Pass/fail totals of accepted, rejected and other
    pub checks: Vec<CheckSummary>,
    /// Requests that failed before a complete response, by category
    pub failures: Vec<FailureCount>,
    /// Latency of complete responses, body included
    pub http_req_duration: TimingSummary,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Count of failed requests in one category.
#[derive(Debug, Clone, Serialize)]
pub struct FailureCount {
    pub category: &'static str,
    pub count: usize,
}

impl RunReport {
    /// Passes of the named check, 0 if no such check exists.
    pub fn passes(&self, name: &str) -> u64 {
        self.checks
            .iter()
            .find(|c| c.name == name)
            .map_or(0, |c| c.passes)
    }

    /// One-line result printed once at the end of a run.
    pub fn summary_line(&self) -> String {
        format!(
            "Ran {} iteration{} in {:.1}s: {} accepted, {} rejected, {} other",
            self.iterations,
            if self.iterations == 1 { "" } else { "s" },
            self.elapsed_seconds,
            self.passes("accepted"),
            self.passes("rejected"),
            self.passes("other")
        )
    }
}

/// Runs a load test with the provided configuration.
///
/// This is the main entry point for the library.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the HTTP client cannot
/// be built, or an export cannot be written. Failed requests are not errors:
/// they are counted as `other`.
///
/// # Example
///
/// ```no_run
/// use status_gate::{run_load, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     host: Some("http://127.0.0.1:8080/".to_string()),
///     vus: 10,
///     iterations: Some(1000),
///     ..Default::default()
/// };
/// let report = run_load(config).await?;
/// println!("{} accepted", report.passes("accepted"));
/// # Ok(())
/// # }
/// ```
pub async fn run_load(config: Config) -> Result<RunReport> {
    let resources = init_run_resources(config)?;

    let signal_cancel = resources.cancel.clone();
    let signal_task = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupted, finishing in-flight iterations");
            signal_cancel.cancel();
        }
    });

    let cancel_logging = resources.cancel.child_token();
    let logging_cancel = resources.cancel.clone();
    let logging_ctx = Arc::clone(&resources.ctx);
    let start_time = resources.start_time;
    let planned = resources.scheduler.limit();
    let logging_task = Some(tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL));
        // The first tick completes immediately
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    log_progress(start_time, &logging_ctx.checks, planned);
                }
                _ = cancel_logging.cancelled() => {
                    break;
                }
            }
        }
    }));

    let mut tasks = FuturesUnordered::new();
    for vu in 1..=resources.config.vus {
        tasks.push(tokio::spawn(run_virtual_user(
            vu,
            Arc::clone(&resources.ctx),
            Arc::clone(&resources.scheduler),
        )));
    }

    while let Some(task_result) = tasks.next().await {
        if let Err(join_error) = task_result {
            log::warn!("Virtual user panicked: {:?}", join_error);
        }
    }

    let loop_result = RunLoopResult {
        cancel: logging_cancel,
        logging_task,
        signal_task,
    };
    finalize_run(resources, loop_result).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::metrics::CheckCounters;

    fn report(iterations: u64, statuses: &[u16]) -> RunReport {
        let checks = CheckCounters::new();
        for status in statuses {
            checks.record(&classify(*status));
        }
        RunReport {
            target: "http://127.0.0.1:8080/".to_string(),
            started_at: "2024-01-01T00:00:00+00:00".to_string(),
            vus: 1,
            connection_reuse: false,
            iterations,
            checks: checks.summary(),
            failures: Vec::new(),
            http_req_duration: TimingSummary::default(),
            elapsed_seconds: 2.04,
        }
    }

    #[test]
    fn test_summary_line() {
        let report = report(3, &[200, 503, 0]);
        assert_eq!(
            report.summary_line(),
            "Ran 3 iterations in 2.0s: 1 accepted, 1 rejected, 1 other"
        );
    }

    #[test]
    fn test_summary_line_single_iteration() {
        let report = report(1, &[200]);
        assert_eq!(
            report.summary_line(),
            "Ran 1 iteration in 2.0s: 1 accepted, 0 rejected, 0 other"
        );
    }

    #[test]
    fn test_passes_unknown_check_is_zero() {
        assert_eq!(report(1, &[200]).passes("timeout"), 0);
    }
}
