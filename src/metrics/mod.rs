//! Run metrics.
//!
//! Lock-free aggregates shared by every virtual user:
//! - `CheckCounters`: pass counts for the accepted/rejected/other checks
//! - `TimingStats`: request latency count, sum, min and max

mod checks;
mod timing;

pub use checks::{CheckCounters, CheckSummary};
pub use timing::{duration_to_micros, TimingStats, TimingSummary};
