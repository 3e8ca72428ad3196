//! Per-iteration CSV export.

use anyhow::{Context, Result};
use csv::Writer;
use std::path::Path;

use crate::run::Sample;

/// Writes one CSV row per iteration, with a header row.
///
/// Returns the number of rows written.
pub fn write_samples(path: &Path, samples: &[Sample]) -> Result<usize> {
    let mut writer = Writer::from_path(path).context("Failed to create samples file")?;
    for sample in samples {
        writer
            .serialize(sample)
            .context("Failed to write sample row")?;
    }
    writer.flush()?;
    Ok(samples.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Check;

    #[test]
    fn test_write_samples() {
        let samples = vec![
            Sample {
                vu: 1,
                iteration: 0,
                status: 200,
                check: Check::Accepted,
                duration_ms: 1.25,
                failure: None,
            },
            Sample {
                vu: 2,
                iteration: 1,
                status: 0,
                check: Check::Other,
                duration_ms: 10.0,
                failure: Some("HTTP request connect error"),
            },
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("samples.csv");
        assert_eq!(write_samples(&path, &samples).unwrap(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "vu,iteration,status,check,duration_ms,failure");
        assert_eq!(lines[1], "1,0,200,accepted,1.25,");
        assert_eq!(lines[2], "2,1,0,other,10.0,HTTP request connect error");
    }
}
