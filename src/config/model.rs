// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Plan file exactly as read from TOML, before validation.
///
/// ```toml
/// [schedule]
/// base_start_ms = 2000
///
/// [job.B]
/// duration_ms = 60000
/// delay_ms = 120000
///
/// [job.A]
/// duration_ms = 60000
/// delay_ms = 30000
/// after_start = ["B"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawPlanFile {
    /// Global settings from `[schedule]`.
    #[serde(default)]
    pub schedule: ScheduleSection,

    /// All jobs from `[job.<name>]`, keyed by job name.
    #[serde(default)]
    pub job: BTreeMap<String, JobConfig>,
}

/// A plan that passed validation. Build one via `PlanFile::try_from(raw)`.
#[derive(Debug, Clone)]
pub struct PlanFile {
    pub schedule: ScheduleSection,
    pub job: BTreeMap<String, JobConfig>,
}

impl PlanFile {
    pub(crate) fn new_unchecked(
        schedule: ScheduleSection,
        job: BTreeMap<String, JobConfig>,
    ) -> Self {
        Self { schedule, job }
    }
}

/// `[schedule]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleSection {
    /// Origin every job's timing is measured from.
    #[serde(default)]
    pub base_start_ms: u64,
}

/// `[job.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobConfig {
    #[serde(default)]
    pub duration_ms: u64,

    /// Fixed offset added after the job's anchor.
    #[serde(default)]
    pub delay_ms: u64,

    /// Start after the latest start of these jobs.
    ///
    /// An empty list still marks the job as start-anchored.
    #[serde(default)]
    pub after_start: Option<Vec<String>>,

    /// Start after the latest end of these jobs.
    #[serde(default)]
    pub after_end: Option<Vec<String>>,
}

impl JobConfig {
    /// All peer names referenced by this job, regardless of kind.
    pub fn referenced_jobs(&self) -> impl Iterator<Item = &String> {
        self.after_start
            .iter()
            .chain(self.after_end.iter())
            .flatten()
    }
}
