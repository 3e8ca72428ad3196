//! Iteration scheduling.
//!
//! Virtual users claim iteration indices from a shared scheduler until the
//! iteration budget is spent, the deadline passes, or the run is cancelled.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

/// Hands out iteration indices to virtual users.
#[derive(Debug)]
pub struct IterationScheduler {
    next: AtomicU64,
    limit: Option<u64>,
    deadline: Option<Instant>,
    cancel: CancellationToken,
}

impl IterationScheduler {
    /// Creates a scheduler.
    ///
    /// At least one of `limit` or `duration` should be set; with neither the
    /// scheduler only stops on cancellation. A duration too large to add to
    /// the current instant means no deadline.
    pub fn new(limit: Option<u64>, duration: Option<Duration>, cancel: CancellationToken) -> Self {
        Self {
            next: AtomicU64::new(0),
            limit,
            deadline: duration.and_then(|d| Instant::now().checked_add(d)),
            cancel,
        }
    }

    /// Claims the next iteration index, or `None` when the run is over.
    ///
    /// With an iteration limit of N, exactly N claims succeed across all
    /// callers.
    pub fn claim(&self) -> Option<u64> {
        if self.cancel.is_cancelled() {
            return None;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return None;
            }
        }

        let index = self.next.fetch_add(1, Ordering::Relaxed);
        match self.limit {
            Some(limit) if index >= limit => None,
            _ => Some(index),
        }
    }

    /// Iteration budget, if the run is iteration-bound.
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }
}
