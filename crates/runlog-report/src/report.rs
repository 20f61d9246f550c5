//! Run-log loading and report rendering.
//!
//! The report streams line by line into the output writer. That ordering
//! is part of the contract: anything printed before a failure stays
//! printed, and the caller appends the single error line afterwards.

use std::fs;
use std::io::Write;
use std::path::Path;

use runlog_types::{Event, FrameStat, RunLog, kinds};
use tracing::debug;

use crate::error::ReportError;

/// Number of frame-stat entries shown at each end of the excerpt.
const STAT_EXCERPT_LEN: usize = 5;

/// Load and parse the run-log document at `path`.
///
/// The file handle is scoped to the read; missing files, permission
/// problems, and invalid UTF-8 all surface as [`ReportError::Read`].
pub fn load_run_log(path: &Path) -> Result<RunLog, ReportError> {
    let content = fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let log: RunLog = serde_json::from_str(&content)?;
    debug!(
        bytes = content.len(),
        events = log.event_count(),
        stats = log.stat_count(),
        "run log parsed"
    );
    Ok(log)
}

/// Stream the report for `log` into `out`.
///
/// Sections, in order: run identifier, event summary with one line per
/// reported event, then a frame-stat excerpt of the first and last five
/// entries separated by a `...` line. The tail is a
/// plain slice from the end and is not deduplicated against the head, so
/// short logs repeat entries.
pub fn write_report(out: &mut impl Write, log: &RunLog) -> Result<(), ReportError> {
    let run_id = log.run_id.as_deref().unwrap_or("None");
    writeln!(out, "Run ID: {run_id}")?;

    writeln!(out)?;
    writeln!(out, "Total Events: {}", log.event_count())?;
    for (index, event) in log.events.iter().enumerate() {
        write_event(out, index, event)?;
    }

    writeln!(out)?;
    writeln!(out, "Total Stats Frames: {}", log.stat_count())?;
    for (index, stat) in log.frame_stats.iter().enumerate().take(STAT_EXCERPT_LEN) {
        write_stat(out, index, stat)?;
    }
    writeln!(out, "...")?;
    let tail_start = log.stat_count().saturating_sub(STAT_EXCERPT_LEN);
    for (index, stat) in log.frame_stats.iter().enumerate().skip(tail_start) {
        write_stat(out, index, stat)?;
    }
    Ok(())
}

/// Write the line for one event, if its tag is a reported kind.
///
/// Every event in the scan must carry a tag; `frame_number` is only
/// required once the event is known to be reported.
fn write_event(out: &mut impl Write, index: usize, event: &Event) -> Result<(), ReportError> {
    let kind = event.kind.as_deref().ok_or(ReportError::EventField {
        index,
        field: "type",
    })?;
    if !kinds::is_reported(kind) {
        return Ok(());
    }
    let frame = event.frame_number.ok_or(ReportError::EventField {
        index,
        field: "frame_number",
    })?;
    let data = event
        .data
        .as_ref()
        .map_or_else(|| "None".to_owned(), ToString::to_string);
    writeln!(out, "Event: {kind} at Frame {frame} - {data}")?;
    Ok(())
}

/// Write the excerpt line for one frame-stat entry.
fn write_stat(out: &mut impl Write, index: usize, stat: &FrameStat) -> Result<(), ReportError> {
    let frame = stat.frame_number.ok_or(ReportError::StatField {
        index,
        field: "frame_number",
    })?;
    let population = stat.population.ok_or(ReportError::StatField {
        index,
        field: "population",
    })?;
    let energy = stat.avg_energy.ok_or(ReportError::StatField {
        index,
        field: "avg_energy",
    })?;
    writeln!(out, "Stat: Frame {frame} | Pop: {population} | Energy: {energy}")?;
    Ok(())
}
