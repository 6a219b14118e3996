use serde::Serialize;

/// Canonical job name type used throughout the crate.
pub type JobName = String;

/// Resolved timing of a single job, in milliseconds relative to the same
/// origin as the scheduler's base start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JobTimes {
    pub start_ms: u64,
    pub duration_ms: u64,
    pub end_ms: u64,
}
