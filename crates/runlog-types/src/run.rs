//! The top-level run-log document.

use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::stats::FrameStat;

/// The full JSON document describing one simulation run.
///
/// The document is read once, never mutated, and discarded when the owning
/// process exits. Absent `events` or `frame_stats` fields are treated as
/// empty sequences; an absent `run_id` is legal and stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunLog {
    /// Opaque identifier assigned by the simulation for this run.
    pub run_id: Option<String>,
    /// Ordered event stream, oldest first.
    #[serde(default)]
    pub events: Vec<Event>,
    /// Ordered per-frame snapshots, oldest first.
    #[serde(default)]
    pub frame_stats: Vec<FrameStat>,
}

impl RunLog {
    /// Number of recorded events.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Number of recorded frame snapshots.
    pub fn stat_count(&self) -> usize {
        self.frame_stats.len()
    }
}
