//! Error types for the WebP converter.
//!
//! Two tiers, both built with `thiserror`:
//! - [`ConvertError`]: a failure local to one file. Reported on the console,
//!   the batch carries on.
//! - [`BatchError`]: a failure of the batch itself (unlistable directory,
//!   invalid settings). Propagates up to `main` and ends the process.

use std::io;
use std::path::{Path, PathBuf};
use image::ImageError;
use thiserror::Error;

/// Per-file conversion failure.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The file content could not be decoded as an image
    #[error("cannot decode image: {0}")]
    Decode(String),

    /// Content is not a format the decoder (or encoder) supports
    #[error("unsupported image: {0}")]
    UnsupportedFormat(String),

    /// The WebP encoder rejected the image
    #[error("WebP encoding failed: {0}")]
    Encode(String),

    /// Writing the output file failed
    #[error("cannot write {}: {message}", .path.display())]
    Write { path: PathBuf, message: String },

    /// Source unreadable or target unwritable due to permissions
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other IO failure while reading the source
    #[error("IO error: {0}")]
    Io(String),
}

/// Convenience result type for per-file operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

impl ConvertError {
    pub fn decode<T: Into<String>>(msg: T) -> Self {
        Self::Decode(msg.into())
    }

    pub fn unsupported<T: Into<String>>(msg: T) -> Self {
        Self::UnsupportedFormat(msg.into())
    }

    pub fn encode<T: Into<String>>(msg: T) -> Self {
        Self::Encode(msg.into())
    }

    /// Classifies an IO error raised while reading `path`.
    pub fn read_failure(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io(err.to_string()),
        }
    }

    /// Classifies an IO error raised while writing `path`.
    pub fn write_failure(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Write {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        }
    }

    /// Classifies a decoder error for the image at `path`.
    pub fn from_image(err: ImageError, path: &Path) -> Self {
        match err {
            ImageError::IoError(e) => Self::read_failure(e, path),
            ImageError::Unsupported(e) => Self::unsupported(e.to_string()),
            other => Self::decode(other.to_string()),
        }
    }
}

/// Fatal failure of the batch as a whole.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The image directory is missing or cannot be listed
    #[error("cannot read image directory {}: {message}", .path.display())]
    DirectoryUnreadable { path: PathBuf, message: String },

    /// Settings failed validation
    #[error("Settings error: {0}")]
    Settings(String),

    /// Status lines could not be written
    #[error("cannot write status output: {0}")]
    Output(String),

    /// The JSON report could not be written
    #[error("cannot write report {}: {message}", .path.display())]
    Report { path: PathBuf, message: String },

    /// A conversion task panicked or was cancelled
    #[error("conversion task failed to run: {0}")]
    Runtime(String),
}

/// Convenience result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

impl BatchError {
    pub fn directory(path: impl Into<PathBuf>, err: io::Error) -> Self {
        Self::DirectoryUnreadable {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    pub fn report(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Report {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}

// Status output goes to stdout; failing to write it ends the batch.
impl From<io::Error> for BatchError {
    fn from(err: io::Error) -> Self {
        Self::Output(err.to_string())
    }
}
