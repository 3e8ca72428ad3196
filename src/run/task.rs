//! Per-iteration processing.
//!
//! One iteration is one GET against the target, with the body read to the
//! end, followed by one classification. Virtual users loop over iterations
//! until the scheduler runs dry.

use std::sync::{Arc, PoisonError};
use std::time::Instant;

use reqwest::header::CONNECTION;

use crate::classify::{classify_outcome, classify_response, NO_RESPONSE_STATUS};
use crate::error_handling::update_error_stats;

use super::resources::{IterationOutcome, RunContext, Sample};
use super::schedule::IterationScheduler;

/// Runs one iteration against the shared context.
///
/// Issues a single GET to the target, reads the body, classifies the result
/// and records the outcome. The recorded latency covers the whole exchange
/// up to the last body byte. A request that never produced a response
/// classifies as `other` and is additionally counted by failure category.
/// A body that fails mid-read keeps the status classification but is
/// counted as a failure and left out of the latency figures. Never fails.
pub async fn iteration(ctx: &RunContext) -> IterationOutcome {
    let mut request = ctx.client.get(ctx.target.clone());
    if !ctx.connection_reuse {
        request = request.header(CONNECTION, "close");
    }

    let start = Instant::now();
    let (status, classification, failure) = match request.send().await {
        Ok(response) => {
            let classification = classify_response(&response);
            let status = response.status().as_u16();
            let failure = match response.bytes().await {
                Ok(_) => None,
                Err(e) => {
                    let error_type = update_error_stats(&ctx.failures, &e);
                    log::debug!(
                        "Reading body from {} failed ({}): {e}",
                        ctx.target,
                        error_type
                    );
                    Some(error_type)
                }
            };
            (status, classification, failure)
        }
        Err(e) => {
            let error_type = update_error_stats(&ctx.failures, &e);
            log::debug!("Request to {} failed ({}): {e}", ctx.target, error_type);
            (NO_RESPONSE_STATUS, classify_outcome(Err(&e)), Some(error_type))
        }
    };
    let elapsed = start.elapsed();

    if failure.is_none() {
        ctx.timing.record(elapsed);
    }
    ctx.checks.record(&classification);

    log::trace!(
        "GET {} -> {} ({}) in {:?}",
        ctx.target,
        status,
        classification.check(),
        elapsed
    );

    IterationOutcome {
        status,
        classification,
        elapsed,
        failure,
    }
}

/// Loop of a single virtual user.
pub async fn run_virtual_user(
    vu: usize,
    ctx: Arc<RunContext>,
    scheduler: Arc<IterationScheduler>,
) {
    while let Some(index) = scheduler.claim() {
        let outcome = iteration(&ctx).await;
        if let Some(samples) = &ctx.samples {
            samples
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(Sample::new(vu, index, &outcome));
        }
    }
    log::debug!("VU {vu} finished");
}
