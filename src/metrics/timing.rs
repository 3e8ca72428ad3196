//! Request latency statistics.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::Serialize;

/// Aggregated request latency across all iterations.
///
/// All times are stored in microseconds for precision, then converted to
/// milliseconds only when displaying or exporting.
#[derive(Debug)]
pub struct TimingStats {
    count: AtomicU64,
    sum_micros: AtomicU64,
    min_micros: AtomicU64,
    max_micros: AtomicU64,
}

/// Latency summary in milliseconds.
///
/// Columns mirror the `summarize` output: min, max, range and average.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimingSummary {
    pub count: u64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub range_ms: f64,
    pub avg_ms: f64,
}

impl Default for TimingStats {
    fn default() -> Self {
        Self {
            count: AtomicU64::new(0),
            sum_micros: AtomicU64::new(0),
            min_micros: AtomicU64::new(u64::MAX),
            max_micros: AtomicU64::new(0),
        }
    }
}

impl TimingStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the latency of one request.
    pub fn record(&self, elapsed: Duration) {
        let micros = duration_to_micros(elapsed);
        self.count.fetch_add(1, Ordering::Relaxed);
        self.sum_micros.fetch_add(micros, Ordering::Relaxed);
        self.min_micros.fetch_min(micros, Ordering::Relaxed);
        self.max_micros.fetch_max(micros, Ordering::Relaxed);
    }

    pub fn count(&self) -> u64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Returns the min/max/range/avg summary, all zero if nothing was recorded.
    pub fn summary(&self) -> TimingSummary {
        let count = self.count();
        if count == 0 {
            return TimingSummary::default();
        }

        let to_ms = |micros: u64| micros as f64 / 1000.0;
        let min = self.min_micros.load(Ordering::SeqCst);
        let max = self.max_micros.load(Ordering::SeqCst);
        let sum = self.sum_micros.load(Ordering::SeqCst);

        TimingSummary {
            count,
            min_ms: to_ms(min),
            max_ms: to_ms(max),
            range_ms: to_ms(max.saturating_sub(min)),
            avg_ms: sum as f64 / count as f64 / 1000.0,
        }
    }

    /// Logs a summary of the latency statistics.
    pub fn log_summary(&self) {
        let summary = self.summary();
        if summary.count == 0 {
            log::info!("No timing data collected");
            return;
        }

        log::info!("=== Request Duration ({} requests) ===", summary.count);
        log::info!("  {:10} {:>10.3} ms", "avg:", summary.avg_ms);
        log::info!("  {:10} {:>10.3} ms", "min:", summary.min_ms);
        log::info!("  {:10} {:>10.3} ms", "max:", summary.max_ms);
        log::info!("  {:10} {:>10.3} ms", "range:", summary.range_ms);
    }
}

/// Converts a Duration to whole microseconds, saturating at `u64::MAX`.
pub fn duration_to_micros(duration: Duration) -> u64 {
    u64::try_from(duration.as_micros()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_to_micros() {
        assert_eq!(duration_to_micros(Duration::from_micros(0)), 0);
        assert_eq!(duration_to_micros(Duration::from_micros(1234)), 1234);
        assert_eq!(duration_to_micros(Duration::from_millis(5)), 5000);
        assert_eq!(duration_to_micros(Duration::from_nanos(500)), 0);
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let stats = TimingStats::new();
        assert_eq!(stats.count(), 0);
        assert_eq!(stats.summary(), TimingSummary::default());
    }

    #[test]
    fn test_summary_min_max_range_avg() {
        let stats = TimingStats::new();
        stats.record(Duration::from_millis(10));
        stats.record(Duration::from_millis(30));
        stats.record(Duration::from_millis(20));

        let summary = stats.summary();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min_ms, 10.0);
        assert_eq!(summary.max_ms, 30.0);
        assert_eq!(summary.range_ms, 20.0);
        assert_eq!(summary.avg_ms, 20.0);
    }

    #[test]
    fn test_single_sample_has_zero_range() {
        let stats = TimingStats::new();
        stats.record(Duration::from_micros(1500));
        let summary = stats.summary();
        assert_eq!(summary.min_ms, 1.5);
        assert_eq!(summary.max_ms, 1.5);
        assert_eq!(summary.range_ms, 0.0);
    }
}
