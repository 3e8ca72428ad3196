//! Side-by-side comparison of two summarized runs.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Writer};

use crate::error_handling::AnalysisError;

use super::{format_value, open_output};

/// Header of the `compare` output.
pub const COMPARE_HEADER: [&str; 4] = ["req", "baseline", "candidate", "fraction"];

/// Column of `avg_time` in a summarized table.
const AVG_COLUMN: usize = 4;

fn avg_field(record: &StringRecord) -> Result<(&str, f64), AnalysisError> {
    let line = record.position().map_or(0, |p| p.line() as usize);
    let field = record.get(AVG_COLUMN).ok_or(AnalysisError::MissingColumn {
        line,
        expected: AVG_COLUMN + 1,
        found: record.len(),
    })?;
    let value = field
        .trim()
        .parse::<f64>()
        .map_err(|_| AnalysisError::NotANumber {
            line,
            value: field.to_string(),
        })?;
    Ok((field, value))
}

/// Pairs rows of two `summarize` outputs.
///
/// Takes the first data row of each input, then every `stride`-th row, and
/// stops as soon as either input runs out. Each output row holds the
/// baseline label, both averages and `candidate / baseline`.
///
/// Returns the number of rows written.
pub fn compare<A: Read, B: Read, W: Write>(
    baseline: A,
    candidate: B,
    stride: usize,
    output: W,
) -> Result<usize> {
    if stride == 0 {
        return Err(AnalysisError::ZeroStride.into());
    }

    let mut baseline = ReaderBuilder::new().flexible(true).from_reader(baseline);
    let mut candidate = ReaderBuilder::new().flexible(true).from_reader(candidate);
    let mut writer = Writer::from_writer(output);
    writer.write_record(COMPARE_HEADER)?;

    let pairs = baseline
        .records()
        .step_by(stride)
        .zip(candidate.records().step_by(stride));

    let mut rows = 0;
    for (a, b) in pairs {
        let a = a.context("Failed to read baseline row")?;
        let b = b.context("Failed to read candidate row")?;
        let (a_field, a_avg) = avg_field(&a)?;
        let (b_field, b_avg) = avg_field(&b)?;
        if a_avg == 0.0 {
            let line = a.position().map_or(0, |p| p.line() as usize);
            return Err(AnalysisError::ZeroBaseline { line }.into());
        }

        writer.write_record([
            a.get(0).unwrap_or_default(),
            a_field,
            b_field,
            format_value(b_avg / a_avg).as_str(),
        ])?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

/// File-level wrapper around [`compare`]; writes to stdout if `output` is `None`.
pub fn compare_files(
    baseline: &Path,
    candidate: &Path,
    stride: usize,
    output: Option<&Path>,
) -> Result<usize> {
    let a = std::fs::File::open(baseline)
        .with_context(|| format!("Failed to open {}", baseline.display()))?;
    let b = std::fs::File::open(candidate)
        .with_context(|| format!("Failed to open {}", candidate.display()))?;
    compare(a, b, stride, open_output(output)?).with_context(|| {
        format!(
            "Failed to compare {} with {}",
            baseline.display(),
            candidate.display()
        )
    })
}
