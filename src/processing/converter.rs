//! The batch loop: discover `*.jpg` files, convert them one by one, report.
//!
//! Each conversion runs inside `tokio::task::spawn_blocking` and is awaited
//! before the next one starts, so the batch is strictly sequential and the
//! codec work never blocks the runtime.

use std::io::Write;
use tracing::{debug, info};

use crate::core::{BatchSummary, ConversionResult, ConversionSettings, ConversionTask};
use crate::utils::{BatchError, BatchResult, ConvertResult, file_size, list_source_files};

use super::codec::convert_single;
use super::reporter::ConsoleReporter;

/// Converts every `*.jpg` in one directory.
#[derive(Debug, Clone)]
pub struct BatchConverter {
    settings: ConversionSettings,
}

impl BatchConverter {
    /// Validates `settings` and builds the converter.
    pub fn new(settings: ConversionSettings) -> BatchResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &ConversionSettings {
        &self.settings
    }

    /// One task per matching file, in processing order.
    ///
    /// # Errors
    /// [`BatchError::DirectoryUnreadable`] when the directory cannot be listed.
    pub async fn discover_tasks(&self) -> BatchResult<Vec<ConversionTask>> {
        let sources = list_source_files(&self.settings.directory).await?;
        Ok(sources
            .into_iter()
            .map(|source| ConversionTask::new(source, self.settings.output_format))
            .collect())
    }

    /// Runs the whole batch, writing status lines to `reporter`.
    ///
    /// Per-file failures are reported and recorded in the summary; only
    /// batch-level failures are returned as errors. The completion banner is
    /// written once every file has been attempted, also for an empty batch.
    pub async fn run<W: Write>(
        &self,
        reporter: &mut ConsoleReporter<W>,
    ) -> BatchResult<BatchSummary> {
        let tasks = self.discover_tasks().await?;
        let total = tasks.len();
        info!(
            "Converting {} file(s) in {} to {} at quality {}",
            total,
            self.settings.directory.display(),
            self.settings.output_format,
            self.settings.quality
        );

        let mut summary = BatchSummary {
            results: Vec::with_capacity(total),
        };

        for (idx, task) in tasks.into_iter().enumerate() {
            debug!("[{}/{}] {}", idx + 1, total, task.source_path.display());

            let source_size = file_size(&task.source_path).await;
            let result = match self.execute(&task).await? {
                Ok(target_size) => {
                    reporter.converted(&task)?;
                    ConversionResult::converted(&task, source_size, target_size)
                }
                Err(e) => {
                    debug!("Conversion failed for {}: {}", task.source_path.display(), e);
                    reporter.failed(&task, &e)?;
                    ConversionResult::failed(&task, source_size, &e)
                }
            };
            summary.results.push(result);
        }

        reporter.complete()?;

        info!(
            "Batch finished: {} converted, {} failed, {} bytes saved",
            summary.converted(),
            summary.failed(),
            summary.total_saved_bytes()
        );

        Ok(summary)
    }

    /// Converts one task on the blocking pool.
    ///
    /// The outer result is the batch-level failure (the task could not run);
    /// the inner one is the per-file outcome.
    async fn execute(&self, task: &ConversionTask) -> BatchResult<ConvertResult<u64>> {
        let task = task.clone();
        let quality = self.settings.quality;

        tokio::task::spawn_blocking(move || convert_single(&task, quality))
            .await
            .map_err(|e| BatchError::runtime(format!("Task panicked: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn invalid_settings_are_rejected_up_front() {
        let settings = ConversionSettings::new("img").with_quality(150);
        assert!(matches!(BatchConverter::new(settings), Err(BatchError::Settings(_))));
    }

    #[tokio::test]
    async fn discovered_tasks_target_webp_siblings() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("b.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"x").unwrap();

        let converter = BatchConverter::new(ConversionSettings::new(dir.path())).unwrap();
        assert_eq!(converter.settings().quality, 80);

        let tasks = converter.discover_tasks().await.unwrap();
        let targets: Vec<_> = tasks.iter().map(|t| t.target_name()).collect();
        assert_eq!(targets, vec!["a.webp", "b.webp"]);
        assert!(tasks.iter().all(|t| t.target_path.parent() == Some(Path::new(dir.path()))));
    }
}
