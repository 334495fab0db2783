use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::utils::BatchError;

/// Extension of the files the converter picks up. Matched case-sensitively.
pub const SOURCE_EXTENSION: &str = "jpg";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    WebP,
}

impl OutputFormat {
    /// Get the default quality value for this format
    pub fn default_quality(&self) -> u8 {
        match self {
            Self::WebP => 80,
        }
    }

    /// Validate quality value for this format
    pub fn validate_quality(&self, quality: u8) -> bool {
        match self {
            Self::WebP => quality <= 100,
        }
    }

    /// Extension written on converted files
    pub fn extension(&self) -> &'static str {
        match self {
            Self::WebP => "webp",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = BatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "webp" => Ok(Self::WebP),
            other => Err(BatchError::settings(format!(
                "Unsupported output format: {}", other
            ))),
        }
    }
}

/// Returns true when `file_name` matches the shell pattern `*.jpg`.
///
/// Like shell globbing, `*` does not match a leading dot, so hidden files
/// are skipped. `PHOTO.JPG` does not match. Names that are not valid UTF-8
/// are matched on their raw bytes.
pub fn matches_source_pattern(file_name: &OsStr) -> bool {
    let name = file_name.as_encoded_bytes();
    !name.starts_with(b".")
        && name
            .strip_suffix(SOURCE_EXTENSION.as_bytes())
            .is_some_and(|stem| stem.ends_with(b"."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_case_sensitive() {
        assert!(matches_source_pattern(OsStr::new("photo.jpg")));
        assert!(!matches_source_pattern(OsStr::new("PHOTO.JPG")));
        assert!(!matches_source_pattern(OsStr::new("photo.Jpg")));
    }

    #[test]
    fn pattern_ignores_other_files() {
        assert!(!matches_source_pattern(OsStr::new("photo.jpeg")));
        assert!(!matches_source_pattern(OsStr::new("photo.png")));
        assert!(!matches_source_pattern(OsStr::new("notes.txt")));
        assert!(!matches_source_pattern(OsStr::new("photojpg")));
        assert!(!matches_source_pattern(OsStr::new(".hidden.jpg")));
    }

    #[test]
    fn pattern_accepts_dotted_stems() {
        assert!(matches_source_pattern(OsStr::new("holiday.2024.jpg")));
        assert!(matches_source_pattern(OsStr::new("a.webp.jpg")));
    }

    #[test]
    fn webp_quality_bounds() {
        let format = OutputFormat::WebP;
        assert_eq!(format.default_quality(), 80);
        assert!(format.validate_quality(0));
        assert!(format.validate_quality(100));
        assert!(!format.validate_quality(101));
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("webp".parse::<OutputFormat>().unwrap(), OutputFormat::WebP);
        assert_eq!("WEBP".parse::<OutputFormat>().unwrap(), OutputFormat::WebP);
        assert!("avif".parse::<OutputFormat>().is_err());
    }
}
