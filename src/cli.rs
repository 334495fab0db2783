//! Command-line arguments.
//!
//! Running without arguments converts `img/` next to the executable at
//! quality 80.

use std::path::PathBuf;
use clap::Parser;
use webp_converter_lib::utils::default_image_dir;
use webp_converter_lib::{BatchResult, ConversionSettings, OutputFormat};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Directory containing the .jpg files [default: img next to the executable]
    pub directory: Option<PathBuf>,

    /// Lossy quality of the output images
    #[arg(short, long, default_value_t = 80, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub quality: u8,

    /// Output format
    #[arg(short, long, default_value_t = OutputFormat::WebP)]
    pub format: OutputFormat,

    /// Write a JSON summary of every conversion to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

impl Args {
    pub fn settings(&self) -> BatchResult<ConversionSettings> {
        let directory = match &self.directory {
            Some(dir) => dir.clone(),
            None => default_image_dir()?,
        };

        let mut settings = ConversionSettings::new(directory).with_quality(self.quality);
        settings.output_format = self.format;
        Ok(settings)
    }
}
