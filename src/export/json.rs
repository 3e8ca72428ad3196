//! JSON summary export.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::run::RunReport;

/// Writes the run report as pretty-printed JSON.
pub fn write_summary(path: &Path, report: &RunReport) -> Result<()> {
    let file = File::create(path).context("Failed to create summary file")?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report).context("Failed to serialize summary")?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
