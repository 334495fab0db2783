//! Core types for conversion settings and results.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::core::ConversionTask;
use crate::utils::{BatchError, BatchResult, ConvertError, OutputFormat};

/// Configuration for one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionSettings {
    /// Directory scanned for `*.jpg` files
    pub directory: PathBuf,
    /// Lossy quality (0-100)
    pub quality: u8,
    /// Output format of converted files
    #[serde(rename = "outputFormat")]
    pub output_format: OutputFormat,
}

impl ConversionSettings {
    /// Settings for `directory` with the format's default quality.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        let output_format = OutputFormat::default();
        Self {
            directory: directory.into(),
            quality: output_format.default_quality(),
            output_format,
        }
    }

    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    pub fn validate(&self) -> BatchResult<()> {
        if !self.output_format.validate_quality(self.quality) {
            return Err(BatchError::settings(format!(
                "Invalid quality value: {}. Must be between 0 and 100", self.quality
            )));
        }
        Ok(())
    }
}

/// Outcome of one conversion attempt.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub source_path: PathBuf,
    pub target_path: PathBuf,
    /// Source file size in bytes
    pub source_size: u64,
    /// Written file size in bytes, 0 on failure
    pub target_size: u64,
    pub success: bool,
    /// Error description if the conversion failed
    pub error: Option<String>,
    /// Bytes saved (negative if the WebP is larger)
    #[serde(rename = "savedBytes")]
    pub saved_bytes: i64,
    /// Share of the source size saved, as a percentage
    #[serde(rename = "compressionRatio")]
    pub compression_ratio: f64,
}

impl ConversionResult {
    pub fn converted(task: &ConversionTask, source_size: u64, target_size: u64) -> Self {
        let saved_bytes = source_size as i64 - target_size as i64;
        let compression_ratio = if source_size > 0 {
            saved_bytes as f64 / source_size as f64 * 100.0
        } else {
            0.0
        };

        Self {
            source_path: task.source_path.clone(),
            target_path: task.target_path.clone(),
            source_size,
            target_size,
            success: true,
            error: None,
            saved_bytes,
            compression_ratio,
        }
    }

    pub fn failed(task: &ConversionTask, source_size: u64, error: &ConvertError) -> Self {
        Self {
            source_path: task.source_path.clone(),
            target_path: task.target_path.clone(),
            source_size,
            target_size: 0,
            success: false,
            error: Some(error.to_string()),
            saved_bytes: 0,
            compression_ratio: 0.0,
        }
    }
}

/// All results of a batch, in processing order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub results: Vec<ConversionResult>,
}

impl BatchSummary {
    pub fn converted(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.converted()
    }

    pub fn total_saved_bytes(&self) -> i64 {
        self.results.iter().map(|r| r.saved_bytes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_use_quality_80() {
        let settings = ConversionSettings::new("img");
        assert_eq!(settings.quality, 80);
        assert_eq!(settings.output_format, OutputFormat::WebP);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn quality_above_100_is_rejected() {
        let settings = ConversionSettings::new("img").with_quality(101);
        assert!(matches!(settings.validate(), Err(BatchError::Settings(_))));
    }

    #[test]
    fn converted_result_computes_savings() {
        let task = ConversionTask::new("img/a.jpg", OutputFormat::WebP);
        let result = ConversionResult::converted(&task, 1000, 600);
        assert!(result.success);
        assert_eq!(result.saved_bytes, 400);
        assert!((result.compression_ratio - 40.0).abs() < f64::EPSILON);

        let grown = ConversionResult::converted(&task, 0, 50);
        assert_eq!(grown.saved_bytes, -50);
        assert_eq!(grown.compression_ratio, 0.0);
    }

    #[test]
    fn summary_counts() {
        let a = ConversionTask::new("a.jpg", OutputFormat::WebP);
        let b = ConversionTask::new("b.jpg", OutputFormat::WebP);
        let summary = BatchSummary {
            results: vec![
                ConversionResult::converted(&a, 100, 40),
                ConversionResult::failed(&b, 0, &ConvertError::decode("bad")),
            ],
        };
        assert_eq!(summary.converted(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.total_saved_bytes(), 60);
        assert_eq!(summary.results[1].error.as_deref(), Some("cannot decode image: bad"));
    }
}
