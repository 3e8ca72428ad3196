//! Per-row min/max/range/avg reduction.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord, Writer};

use crate::error_handling::AnalysisError;

use super::{format_value, open_output};

/// Header of the `summarize` output.
pub const SUMMARY_HEADER: [&str; 5] = ["req", "min_time", "max_time", "time_range", "avg_time"];

/// Statistics of one input row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSummary {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub avg: f64,
}

/// Reduces one `label,value,value,...` record.
pub fn summarize_row(record: &StringRecord, line: usize) -> Result<RowSummary, AnalysisError> {
    let label = record.get(0).unwrap_or_default().to_string();
    let values = record
        .iter()
        .skip(1)
        .map(|field| {
            field
                .trim()
                .parse::<f64>()
                .map_err(|_| AnalysisError::NotANumber {
                    line,
                    value: field.to_string(),
                })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    if values.is_empty() {
        return Err(AnalysisError::EmptyRow { line });
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let avg = values.iter().sum::<f64>() / values.len() as f64;

    Ok(RowSummary {
        label,
        min,
        max,
        range: max - min,
        avg,
    })
}

/// Summarizes every row of `input` (after its header) into `output`.
///
/// Returns the number of data rows written.
pub fn summarize<R: Read, W: Write>(input: R, output: W) -> Result<usize> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    let mut writer = Writer::from_writer(output);
    writer.write_record(SUMMARY_HEADER)?;

    let mut rows = 0;
    for record in reader.records() {
        let record = record.context("Failed to read input row")?;
        let line = record.position().map_or(0, |p| p.line() as usize);
        let summary = summarize_row(&record, line)?;
        writer.write_record([
            summary.label,
            format_value(summary.min),
            format_value(summary.max),
            format_value(summary.range),
            format_value(summary.avg),
        ])?;
        rows += 1;
    }

    writer.flush()?;
    Ok(rows)
}

/// File-level wrapper around [`summarize`]; writes to stdout if `output` is `None`.
pub fn summarize_file(input: &Path, output: Option<&Path>) -> Result<usize> {
    let file = std::fs::File::open(input)
        .with_context(|| format!("Failed to open {}", input.display()))?;
    summarize(file, open_output(output)?)
        .with_context(|| format!("Failed to summarize {}", input.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str) -> Result<String> {
        let mut out = Vec::new();
        summarize(input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_summarize_rows() {
        let input = "req,t1,t2,t3\n1,0.5,1.5,1.0\n5,2,4,6\n";
        let output = run(input).unwrap();
        assert_eq!(
            output,
            "req,min_time,max_time,time_range,avg_time\n\
             1,0.500000,1.500000,1.000000,1.000000\n\
             5,2.000000,6.000000,4.000000,4.000000\n"
        );
    }

    #[test]
    fn test_summarize_rows_of_different_lengths() {
        let input = "req,t1,t2\n10,3\n50,1,2,3,4\n";
        let output = run(input).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "10,3.000000,3.000000,0.000000,3.000000");
        assert_eq!(lines[2], "50,1.000000,4.000000,3.000000,2.500000");
    }

    #[test]
    fn test_summarize_header_only() {
        let output = run("req,t1\n").unwrap();
        assert_eq!(output, "req,min_time,max_time,time_range,avg_time\n");
    }

    #[test]
    fn test_summarize_rejects_non_numeric() {
        let err = run("req,t1\n1,abc\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::NotANumber { line: 2, .. })
        ));
    }

    #[test]
    fn test_summarize_rejects_label_only_row() {
        let err = run("req,t1\n1\n").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AnalysisError>(),
            Some(AnalysisError::EmptyRow { .. })
        ));
    }

    #[test]
    fn test_summarize_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.csv");
        let output = dir.path().join("summary.csv");
        std::fs::write(&input, "req,a,b\nx,1,3\n").unwrap();

        assert_eq!(summarize_file(&input, Some(&output)).unwrap(), 1);
        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.ends_with("x,1.000000,3.000000,2.000000,2.000000\n"));
    }
}
