pub mod error;
pub mod formats;
pub mod fs;

pub use error::{BatchError, BatchResult, ConvertError, ConvertResult};
pub use formats::{OutputFormat, SOURCE_EXTENSION, matches_source_pattern};
pub use fs::{
    DEFAULT_IMAGE_DIR,
    default_image_dir,
    extract_filename,
    file_size,
    list_source_files,
};
