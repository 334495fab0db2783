//! Console status lines and the optional JSON report.

use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::core::{BatchSummary, ConversionTask};
use crate::utils::{BatchError, BatchResult, ConvertError};

/// Writes the per-file status lines and the completion banner.
///
/// The line formats are consumed by people and scripts alike; keep them
/// byte-for-byte stable.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn converted(&mut self, task: &ConversionTask) -> BatchResult<()> {
        writeln!(
            self.out,
            "✓ Converted: {} -> {}",
            task.source_name(),
            task.target_name()
        )?;
        self.out.flush()?;
        Ok(())
    }

    pub fn failed(&mut self, task: &ConversionTask, error: &ConvertError) -> BatchResult<()> {
        writeln!(self.out, "✗ Error converting {}: {}", task.source_name(), error)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn complete(&mut self) -> BatchResult<()> {
        writeln!(self.out, "\nConversion complete!")?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Writes `summary` as pretty-printed JSON to `path`.
pub fn write_json_report(summary: &BatchSummary, path: &Path) -> BatchResult<()> {
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| BatchError::report(path, format!("Failed to serialize summary: {}", e)))?;
    std::fs::write(path, json).map_err(|e| BatchError::report(path, e.to_string()))?;
    debug!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConversionResult;
    use crate::utils::OutputFormat;
    use tempfile::TempDir;

    fn output(reporter: ConsoleReporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn success_line_names_both_files() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        let task = ConversionTask::new("img/a.jpg", OutputFormat::WebP);
        reporter.converted(&task).unwrap();
        assert_eq!(output(reporter), "✓ Converted: a.jpg -> a.webp\n");
    }

    #[test]
    fn failure_line_carries_the_error_text() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        let task = ConversionTask::new("img/b.jpg", OutputFormat::WebP);
        reporter.failed(&task, &ConvertError::decode("bad marker")).unwrap();
        assert_eq!(
            output(reporter),
            "✗ Error converting b.jpg: cannot decode image: bad marker\n"
        );
    }

    #[test]
    fn banner_is_preceded_by_a_blank_line() {
        let mut reporter = ConsoleReporter::new(Vec::new());
        reporter.complete().unwrap();
        assert_eq!(output(reporter), "\nConversion complete!\n");
    }

    #[test]
    fn report_is_valid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.json");
        let task = ConversionTask::new("img/a.jpg", OutputFormat::WebP);
        let summary = BatchSummary {
            results: vec![ConversionResult::converted(&task, 200, 100)],
        };

        write_json_report(&summary, &path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["results"][0]["savedBytes"], 100);
        assert_eq!(value["results"][0]["success"], true);
    }

    #[test]
    fn report_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("report.json");
        let err = write_json_report(&BatchSummary::default(), &path).unwrap_err();
        assert!(matches!(err, BatchError::Report { .. }));
    }
}
