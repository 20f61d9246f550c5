//! Shared type definitions for Cells simulation run logs.
//!
//! A run log is the JSON document the simulation writes for one run: an
//! opaque run identifier, an ordered event stream, and periodic per-frame
//! population statistics. This crate is the single source of truth for that
//! document's shape across the log tooling; it does no I/O of its own.
//!
//! # Modules
//!
//! - [`event`] -- Simulation events and the well-known event tags
//! - [`run`] -- The top-level [`RunLog`] document
//! - [`stats`] -- Per-frame population snapshots

pub mod event;
pub mod run;
pub mod stats;

// Re-export all public types at crate root for convenience.
pub use event::{Event, kinds};
pub use run::RunLog;
pub use stats::FrameStat;
