//! Conversion task definition and creation.

use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::utils::{OutputFormat, extract_filename};

/// A single source image and the file it converts to.
///
/// Lives for one loop iteration of the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionTask {
    /// Path to the source `.jpg` file
    pub source_path: PathBuf,
    /// Sibling path with the output format's extension
    pub target_path: PathBuf,
}

impl ConversionTask {
    /// Creates the task for `source_path`, swapping its trailing extension
    /// for the one of `format`.
    pub fn new(source_path: impl Into<PathBuf>, format: OutputFormat) -> Self {
        let source_path = source_path.into();
        let target_path = source_path.with_extension(format.extension());
        Self {
            source_path,
            target_path,
        }
    }

    pub fn source_name(&self) -> String {
        extract_filename(&self.source_path)
    }

    pub fn target_name(&self) -> String {
        extract_filename(&self.target_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn target_swaps_extension_in_same_directory() {
        let task = ConversionTask::new("img/a.jpg", OutputFormat::WebP);
        assert_eq!(task.target_path, Path::new("img/a.webp"));
        assert_eq!(task.source_path.parent(), task.target_path.parent());
        assert_eq!(task.source_name(), "a.jpg");
        assert_eq!(task.target_name(), "a.webp");
    }

    #[test]
    fn only_the_trailing_extension_is_replaced() {
        let task = ConversionTask::new("img/holiday.2024.jpg", OutputFormat::WebP);
        assert_eq!(task.target_name(), "holiday.2024.webp");
    }
}
