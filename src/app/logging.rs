//! Progress logging utilities.

use log::info;
use std::time::Instant;

use crate::metrics::CheckCounters;

/// Logs how many iterations have completed and the current rate.
///
/// # Arguments
///
/// * `start_time` - When the run started
/// * `checks` - Shared check counters
/// * `planned` - Total planned iterations, if the run is iteration-bound
pub fn log_progress(start_time: Instant, checks: &CheckCounters, planned: Option<u64>) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let completed = checks.iterations();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    match planned {
        Some(total) => info!(
            "Completed {}/{} iterations in {:.2} seconds (~{:.2} iterations/sec)",
            completed, total, elapsed_secs, rate
        ),
        None => info!(
            "Completed {} iterations in {:.2} seconds (~{:.2} iterations/sec)",
            completed, elapsed_secs, rate
        ),
    }
}
