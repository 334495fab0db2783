//! Decode, encode and write for a single image.
//!
//! Everything here is blocking and runs on tokio's blocking pool. The decoded
//! image and the source file handle are owned by [`convert_single`]'s scope,
//! so they are released on every exit path.

use std::io::Write;
use std::path::Path;
use image::{DynamicImage, ImageReader};
use tempfile::NamedTempFile;
use tracing::debug;
use webp::Encoder;

use crate::core::ConversionTask;
use crate::utils::{ConvertError, ConvertResult, extract_filename};

/// Decodes `path` into memory. The container format is sniffed from the
/// content, so the extension is not trusted.
pub fn decode_image(path: &Path) -> ConvertResult<DynamicImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| ConvertError::read_failure(e, path))?
        .with_guessed_format()
        .map_err(|e| ConvertError::read_failure(e, path))?;

    reader
        .decode()
        .map_err(|e| ConvertError::from_image(e, path))
}

/// Encodes `image` as lossy WebP at `quality` (0-100).
///
/// Images with an alpha channel are encoded as RGBA, everything else as RGB.
pub fn encode_webp(image: &DynamicImage, quality: u8) -> ConvertResult<Vec<u8>> {
    let (width, height) = (image.width(), image.height());
    let quality = f32::from(quality);

    let encoded = if image.color().has_alpha() {
        let rgba = image.to_rgba8();
        Encoder::from_rgba(rgba.as_raw(), width, height).encode_simple(false, quality)
    } else {
        let rgb = image.to_rgb8();
        Encoder::from_rgb(rgb.as_raw(), width, height).encode_simple(false, quality)
    };

    encoded
        .map(|memory| memory.to_vec())
        .map_err(|e| ConvertError::encode(format!("{e:?} ({width}x{height})")))
}

/// Writes the encoded bytes to `path`, replacing any existing file.
///
/// The bytes land in a temporary sibling first and are renamed over `path`,
/// so a failed write keeps the previous output intact. The temporary file is
/// removed on every error path.
pub fn write_output(path: &Path, bytes: &[u8]) -> ConvertResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)
        .map_err(|e| ConvertError::write_failure(e, path))?;
    staged
        .write_all(bytes)
        .and_then(|()| staged.as_file().sync_all())
        .map_err(|e| ConvertError::write_failure(e, path))?;
    staged
        .persist(path)
        .map_err(|e| ConvertError::write_failure(e.error, path))?;
    Ok(())
}

/// Converts one task and returns the number of bytes written.
///
/// Encoding finishes in memory before the target is created, so a failed
/// encode never leaves a partial file behind.
pub fn convert_single(task: &ConversionTask, quality: u8) -> ConvertResult<u64> {
    let image = decode_image(&task.source_path)?;

    debug!(
        "Loaded '{}': {}×{} {:?}",
        extract_filename(&task.source_path),
        image.width(),
        image.height(),
        image.color()
    );

    let bytes = encode_webp(&image, quality)?;
    drop(image);

    write_output(&task.target_path, &bytes)?;
    Ok(bytes.len() as u64)
}
