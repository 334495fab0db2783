// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod processing;

// Public exports for external consumers
pub use crate::core::{BatchSummary, ConversionResult, ConversionSettings, ConversionTask};
pub use crate::processing::{BatchConverter, ConsoleReporter, write_json_report};
pub use crate::utils::{BatchError, BatchResult, ConvertError, ConvertResult, OutputFormat};

// The binary in main.rs is a thin CLI over this library.
