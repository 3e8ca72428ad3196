//! Export of run results.
//!
//! - JSON: the whole `RunReport`, pretty-printed
//! - CSV: one row per iteration (`vu,iteration,status,check,duration_ms,failure`)

mod csv;
mod json;

pub use self::csv::write_samples;
pub use self::json::write_summary;
