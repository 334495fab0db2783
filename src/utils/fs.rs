use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;
use crate::utils::{BatchError, BatchResult, matches_source_pattern};

/// Name of the image directory resolved next to the executable.
pub const DEFAULT_IMAGE_DIR: &str = "img";

/// Lists the files in `dir` matching `*.jpg`, sorted by name.
///
/// Non-recursive. Any failure to open or walk the directory is fatal for the
/// batch and returned as [`BatchError::DirectoryUnreadable`].
pub async fn list_source_files(dir: impl AsRef<Path>) -> BatchResult<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| BatchError::directory(dir, e))?;

    let mut sources = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| BatchError::directory(dir, e))?
    {
        if matches_source_pattern(&entry.file_name()) {
            sources.push(entry.path());
        }
    }

    sources.sort();
    debug!("Found {} source files in {}", sources.len(), dir.display());
    Ok(sources)
}

/// Get file size in bytes, 0 when the file cannot be inspected
pub async fn file_size(path: impl AsRef<Path>) -> u64 {
    fs::metadata(path.as_ref())
        .await
        .map(|m| m.len())
        .unwrap_or(0)
}

/// Final path component as a displayable string
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// `img` directory next to the running executable.
pub fn default_image_dir() -> BatchResult<PathBuf> {
    let exe = std::env::current_exe()
        .map_err(|e| BatchError::settings(format!("Cannot locate executable: {}", e)))?;
    let base = exe
        .parent()
        .ok_or_else(|| BatchError::settings(format!(
            "Executable has no parent directory: {}", exe.display()
        )))?;
    Ok(base.join(DEFAULT_IMAGE_DIR))
}
