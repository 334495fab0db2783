//! Image conversion.
//!
//! - [`BatchConverter`]: drives the sequential batch and reports each outcome.
//! - [`codec`]: decode via `image`, lossy encode via `webp`, write to disk.
//! - [`ConsoleReporter`]: the `✓` / `✗` status lines and completion banner.

pub mod codec;
mod converter;
mod reporter;

pub use converter::BatchConverter;
pub use reporter::{ConsoleReporter, write_json_report};
