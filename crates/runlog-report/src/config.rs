//! Reporter configuration.
//!
//! The log path is the reporter's only knob. It resolves in priority
//! order: positional argument, then the `RUNLOG_PATH` environment
//! variable, then a compiled-in default next to where the simulation
//! writes its logs.

use std::path::PathBuf;

use clap::Parser;

/// Default log location relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "logs/run_log.json";

/// Command-line surface for `runlog-report`.
#[derive(Debug, Parser)]
#[command(
    name = "runlog-report",
    version,
    about = "Summarize a Cells simulation run log"
)]
pub struct ReporterConfig {
    /// Path to the run-log JSON file.
    #[arg(env = "RUNLOG_PATH", default_value = DEFAULT_LOG_PATH)]
    pub log_path: PathBuf,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn positional_path_overrides_default() {
        let config = ReporterConfig::try_parse_from(["runlog-report", "logs/other.json"]).unwrap();
        assert_eq!(config.log_path, PathBuf::from("logs/other.json"));
    }

    #[test]
    fn default_path_applies() {
        // Env resolution is exercised in the integration tests; a bare
        // invocation here may still pick up RUNLOG_PATH from the test
        // runner's environment, so only the flag-free shape is asserted.
        let config = ReporterConfig::try_parse_from(["runlog-report"]).unwrap();
        assert!(!config.log_path.as_os_str().is_empty());
    }

    #[test]
    fn rejects_extra_arguments() {
        assert!(ReporterConfig::try_parse_from(["runlog-report", "a.json", "b.json"]).is_err());
    }
}
