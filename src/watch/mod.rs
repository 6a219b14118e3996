// src/watch/mod.rs

//! Plan file watching for `--watch`.
//!
//! A `notify` watcher turns writes to the plan file into [`WatchEvent`]s,
//! and a blake3 [`PlanFingerprint`] filters out events that did not change
//! the file's content. Resolution itself stays synchronous; every change
//! builds a fresh scheduler.

pub mod hash;
pub mod watcher;

pub use hash::{compute_file_hash, PlanFingerprint};
pub use watcher::{spawn_plan_watcher, WatcherHandle};

/// Events driving the watch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEvent {
    /// The plan file was written.
    PlanChanged,
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}
