//! End-of-run statistics printing.

use log::info;

use crate::error_handling::FailureStats;
use crate::metrics::CheckCounters;

/// Prints the per-check pass rates.
///
/// One line per check: name, pass percentage, passes and fails.
pub fn print_check_statistics(checks: &CheckCounters) {
    let iterations = checks.iterations();
    info!("Checks ({} iterations):", iterations);
    for summary in checks.summary() {
        info!(
            "   {:10} {:>7.2}%  passed={} failed={}",
            summary.name,
            summary.rate * 100.0,
            summary.passes,
            summary.fails
        );
    }
}

/// Prints failed-request counts by category, if there were any.
pub fn print_failure_statistics(failures: &FailureStats) {
    let total = failures.total_errors();
    if total == 0 {
        return;
    }

    info!("Failed requests ({} total):", total);
    for (name, count) in failures.snapshot() {
        info!("   {}: {}", name, count);
    }
}
