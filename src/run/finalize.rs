//! Run finalization.

use std::sync::PoisonError;

use anyhow::{Context, Result};

use crate::app::{
    log_progress, print_check_statistics, print_failure_statistics, shutdown_gracefully,
};
use crate::export::{write_samples, write_summary};

use super::{FailureCount, RunLoopResult, RunReport, RunResources};

/// Finalize a run and produce the final report.
///
/// 1. Shut down the progress logger and the Ctrl-C watcher
/// 2. Log final progress and print check, failure and timing statistics
/// 3. Write the configured exports
///
/// # Errors
///
/// Returns an error if an export file cannot be written.
pub async fn finalize_run(resources: RunResources, loop_result: RunLoopResult) -> Result<RunReport> {
    let RunLoopResult {
        cancel,
        logging_task,
        signal_task,
    } = loop_result;

    shutdown_gracefully(cancel, logging_task).await;
    signal_task.abort();

    let ctx = &resources.ctx;
    log_progress(resources.start_time, &ctx.checks, resources.scheduler.limit());

    let elapsed_seconds = resources.start_time.elapsed().as_secs_f64();

    print_check_statistics(&ctx.checks);
    print_failure_statistics(&ctx.failures);
    ctx.timing.log_summary();

    let report = RunReport {
        target: ctx.target.to_string(),
        started_at: resources.started_at.clone(),
        vus: resources.config.vus,
        connection_reuse: ctx.connection_reuse,
        iterations: ctx.checks.iterations(),
        checks: ctx.checks.summary(),
        failures: ctx
            .failures
            .snapshot()
            .into_iter()
            .map(|(category, count)| FailureCount { category, count })
            .collect(),
        http_req_duration: ctx.timing.summary(),
        elapsed_seconds,
    };

    if let Some(path) = &resources.config.summary_export {
        write_summary(path, &report)
            .with_context(|| format!("Failed to write summary to {}", path.display()))?;
        log::info!("Summary written to {}", path.display());
    }

    if let (Some(path), Some(samples)) = (&resources.config.samples_csv, &ctx.samples) {
        let samples = samples.lock().unwrap_or_else(PoisonError::into_inner);
        write_samples(path, &samples)
            .with_context(|| format!("Failed to write samples to {}", path.display()))?;
        log::info!("{} samples written to {}", samples.len(), path.display());
    }

    Ok(report)
}
