//! Check pass counters.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use strum::IntoEnumIterator;

use crate::classify::{Check, Classification};

/// Thread-safe pass counters for the three checks.
///
/// Every recorded classification bumps `iterations` and the counter of the
/// check that passed, so the three pass counts always sum to `iterations`.
#[derive(Debug, Default)]
pub struct CheckCounters {
    iterations: AtomicU64,
    accepted: AtomicU64,
    rejected: AtomicU64,
    other: AtomicU64,
}

/// Pass/fail totals of a single check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckSummary {
    pub name: &'static str,
    pub passes: u64,
    pub fails: u64,
    /// Fraction of iterations in which the check passed (0.0-1.0)
    pub rate: f64,
}

impl CheckCounters {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, check: Check) -> &AtomicU64 {
        match check {
            Check::Accepted => &self.accepted,
            Check::Rejected => &self.rejected,
            Check::Other => &self.other,
        }
    }

    /// Records the outcome of one iteration.
    pub fn record(&self, classification: &Classification) {
        self.iterations.fetch_add(1, Ordering::Relaxed);
        for check in Check::iter() {
            if classification.passed(check) {
                self.counter(check).fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    /// Number of recorded iterations.
    pub fn iterations(&self) -> u64 {
        self.iterations.load(Ordering::SeqCst)
    }

    /// Number of iterations in which `check` passed.
    pub fn passes(&self, check: Check) -> u64 {
        self.counter(check).load(Ordering::SeqCst)
    }

    /// Per-check totals in reporting order.
    pub fn summary(&self) -> Vec<CheckSummary> {
        let iterations = self.iterations();
        Check::iter()
            .map(|check| {
                let passes = self.passes(check);
                let rate = if iterations == 0 {
                    0.0
                } else {
                    passes as f64 / iterations as f64
                };
                CheckSummary {
                    name: check.name(),
                    passes,
                    fails: iterations.saturating_sub(passes),
                    rate,
                }
            })
            .collect()
    }
}
