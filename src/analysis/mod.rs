//! Post-processing of latency tables.
//!
//! - `summarize`: reduce each `label,value,value,...` row to
//!   `min_time,max_time,time_range,avg_time`
//! - `compare`: pair the averages of two summarized runs and compute the
//!   candidate/baseline fraction

mod compare;
mod summarize;

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub use compare::{compare, compare_files, COMPARE_HEADER};
pub use summarize::{summarize, summarize_file, summarize_row, RowSummary, SUMMARY_HEADER};

/// Opens `output` for writing, or stdout if no path is given.
fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Formats a value the way every analysis table does (6 decimals).
fn format_value(value: f64) -> String {
    format!("{value:.6}")
}
