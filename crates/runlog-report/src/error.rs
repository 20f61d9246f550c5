//! Error types for the log reporter.
//!
//! Uses `thiserror` for typed errors. Every variant surfaces identically at
//! the top level -- the reporter prints one `Error: <message>` line and
//! stops. The variants exist for tests and embedding callers, not for
//! differentiated recovery.

use std::io;

/// Errors that can occur while loading or rendering a run-log report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The log file could not be opened, read, or decoded as UTF-8.
    #[error("cannot read {path}: {source}")]
    Read {
        /// The path that failed to load.
        path: String,
        /// The underlying filesystem or decoding error.
        source: io::Error,
    },

    /// The file content is not well-formed JSON.
    #[error("malformed run log: {0}")]
    Parse(#[from] serde_json::Error),

    /// The report could not be written to its output stream.
    #[error("report write failed: {0}")]
    Io(#[from] io::Error),

    /// An event was inspected for the report but lacks a required field.
    ///
    /// This aborts the whole report. Untagged events are tolerated in the
    /// document but not in the event scan, matching the producer's
    /// contract that every event carries a `type`.
    #[error("event #{index} is missing required field `{field}`")]
    EventField {
        /// Position of the event in the `events` sequence.
        index: usize,
        /// Name of the absent field.
        field: &'static str,
    },

    /// A frame-stat entry selected for the excerpt lacks a required field.
    #[error("frame stat #{index} is missing required field `{field}`")]
    StatField {
        /// Position of the entry in the `frame_stats` sequence.
        index: usize,
        /// Name of the absent field.
        field: &'static str,
    },
}
