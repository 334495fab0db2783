//! Core conversion types.
//!
//! - [`ConversionTask`]: one source image and its target path
//! - [`ConversionSettings`]: directory, quality and output format of a run
//! - [`ConversionResult`]: outcome of one conversion attempt
//! - [`BatchSummary`]: every result of a run, in processing order

mod task;
mod types;

pub use task::ConversionTask;
pub use types::{BatchSummary, ConversionResult, ConversionSettings};
