// Entry point for the webp-converter binary.
// Conversion logic lives in the library (lib.rs); this file wires up logging,
// arguments and the runtime.

mod cli;

use std::io;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use webp_converter_lib::{BatchConverter, ConsoleReporter, write_json_report};

use crate::cli::Args;

fn init_tracing() {
    // Status lines own stdout; diagnostics go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let settings = args.settings().context("Invalid configuration")?;
    debug!("Settings: {:?}", settings);

    let converter = BatchConverter::new(settings).context("Invalid configuration")?;
    let mut reporter = ConsoleReporter::new(io::stdout());

    let summary = converter
        .run(&mut reporter)
        .await
        .context("Conversion batch aborted")?;

    if let Some(path) = &args.report {
        write_json_report(&summary, path)?;
        info!("Report written to {}", path.display());
    }

    Ok(())
}
