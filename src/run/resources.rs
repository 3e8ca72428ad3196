//! Run resources and state management.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde::Serialize;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::classify::{Check, Classification};
use crate::config::Config;
use crate::error_handling::{ErrorType, FailureStats};
use crate::metrics::{CheckCounters, TimingStats};

use super::schedule::IterationScheduler;

/// Shared state every iteration reads from and records into.
pub struct RunContext {
    /// HTTP client shared by all virtual users
    pub client: Arc<reqwest::Client>,
    /// Validated target URL
    pub target: Url,
    /// Whether connections may be kept alive between iterations
    pub connection_reuse: bool,
    /// Check pass counters
    pub checks: Arc<CheckCounters>,
    /// Latency of requests that produced a response
    pub timing: Arc<TimingStats>,
    /// Requests that produced no response, by category
    pub failures: Arc<FailureStats>,
    /// Per-iteration samples, collected only when CSV export is configured
    pub samples: Option<Arc<Mutex<Vec<Sample>>>>,
}

/// All resources initialized for a run.
pub struct RunResources {
    /// Shared iteration context
    pub ctx: Arc<RunContext>,
    /// Iteration budget and deadline
    pub scheduler: Arc<IterationScheduler>,
    /// Cancelled on Ctrl-C or when the run finishes
    pub cancel: CancellationToken,
    /// Wall-clock start of the run (RFC 3339)
    pub started_at: String,
    /// Start time as Instant for elapsed time calculations
    pub start_time: Instant,
    /// Original configuration (for reference during finalization)
    pub config: Config,
}

/// Result of the main run loop, consumed by finalization.
pub struct RunLoopResult {
    /// Cancellation token for the logging task
    pub cancel: CancellationToken,
    /// Handle to the progress logging task
    pub logging_task: Option<tokio::task::JoinHandle<()>>,
    /// Handle to the Ctrl-C watcher
    pub signal_task: tokio::task::JoinHandle<()>,
}

/// What one iteration observed.
#[derive(Debug, Clone)]
pub struct IterationOutcome {
    /// Status code, or 0 when no response was obtained
    pub status: u16,
    pub classification: Classification,
    pub elapsed: Duration,
    /// Failure category when no response was obtained
    pub failure: Option<ErrorType>,
}

/// One CSV row per iteration.
#[derive(Debug, Clone, Serialize)]
pub struct Sample {
    pub vu: usize,
    pub iteration: u64,
    pub status: u16,
    pub check: Check,
    pub duration_ms: f64,
    pub failure: Option<&'static str>,
}

impl Sample {
    pub fn new(vu: usize, iteration: u64, outcome: &IterationOutcome) -> Self {
        Self {
            vu,
            iteration,
            status: outcome.status,
            check: outcome.classification.check(),
            duration_ms: outcome.elapsed.as_secs_f64() * 1000.0,
            failure: outcome.failure.map(|f| f.as_str()),
        }
    }
}
