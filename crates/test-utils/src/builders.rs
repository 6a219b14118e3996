#![allow(dead_code)]

use std::collections::BTreeMap;
use reltime::config::{JobConfig, PlanFile, RawPlanFile, ScheduleSection};

/// Builder for `PlanFile` to simplify test setup.
pub struct PlanFileBuilder {
    plan: RawPlanFile,
}

impl PlanFileBuilder {
    pub fn new() -> Self {
        Self {
            plan: RawPlanFile {
                schedule: ScheduleSection::default(),
                job: BTreeMap::new(),
            },
        }
    }

    pub fn base_start_ms(mut self, ms: u64) -> Self {
        self.plan.schedule.base_start_ms = ms;
        self
    }

    pub fn with_job(mut self, name: &str, job: JobConfig) -> Self {
        self.plan.job.insert(name.to_string(), job);
        self
    }

    /// The raw plan, for tests that exercise validation failures.
    pub fn build_raw(self) -> RawPlanFile {
        self.plan
    }

    pub fn build(self) -> PlanFile {
        PlanFile::try_from(self.plan).expect("Failed to build valid plan from builder")
    }
}

impl Default for PlanFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `JobConfig`.
pub struct JobConfigBuilder {
    job: JobConfig,
}

impl JobConfigBuilder {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            job: JobConfig {
                duration_ms,
                delay_ms: 0,
                after_start: None,
                after_end: None,
            },
        }
    }

    pub fn delay(mut self, delay_ms: u64) -> Self {
        self.job.delay_ms = delay_ms;
        self
    }

    pub fn after_start(mut self, dep: &str) -> Self {
        self.job
            .after_start
            .get_or_insert_with(Vec::new)
            .push(dep.to_string());
        self
    }

    pub fn after_end(mut self, dep: &str) -> Self {
        self.job
            .after_end
            .get_or_insert_with(Vec::new)
            .push(dep.to_string());
        self
    }

    pub fn build(self) -> JobConfig {
        self.job
    }
}
