//! Entry point for the Cells run-log reporter.
//!
//! Loads one run-log JSON document and prints a human-readable summary to
//! standard output: the run identifier, every reproduction/death/mutation
//! event, and an excerpt of the per-frame population statistics.
//!
//! Standard output carries the report and nothing else; diagnostics go to
//! stderr through `tracing`. Failures anywhere in the pipeline surface as
//! a single `Error: <message>` line after whatever was already printed,
//! and the process still exits 0 -- the printed line is the contract.

mod config;
mod error;
mod report;

use std::io::{self, Write};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ReporterConfig;
use crate::error::ReportError;
use crate::report::{load_run_log, write_report};

/// Application entry point.
///
/// Initializes logging, resolves the log path, then streams the report.
/// Fully sequential and synchronous; the only resource is the one file
/// handle scoped inside [`load_run_log`].
fn main() {
    // Initialize structured logging (stderr only; stdout belongs to the report)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    let config = ReporterConfig::parse();
    info!(path = %config.log_path.display(), "loading run log");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = run(&mut out, &config) {
        error!(error = %e, "report aborted");
        let _ = writeln!(out, "Error: {e}");
    }
}

/// Load the configured log and stream its report into `out`.
fn run(out: &mut impl Write, config: &ReporterConfig) -> Result<(), ReportError> {
    let log = load_run_log(&config.log_path)?;
    info!(
        run_id = log.run_id.as_deref().unwrap_or("None"),
        events = log.event_count(),
        stats = log.stat_count(),
        "run log loaded"
    );
    write_report(out, &log)
}
