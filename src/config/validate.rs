// src/config/validate.rs

use crate::config::model::{PlanFile, RawPlanFile};
use crate::errors::{ReltimeError, Result};

impl TryFrom<RawPlanFile> for PlanFile {
    type Error = crate::errors::ReltimeError;

    fn try_from(raw: RawPlanFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_plan(&raw)?;
        Ok(PlanFile::new_unchecked(raw.schedule, raw.job))
    }
}

fn validate_raw_plan(plan: &RawPlanFile) -> Result<()> {
    ensure_has_jobs(plan)?;
    validate_job_references(plan)?;
    Ok(())
}

fn ensure_has_jobs(plan: &RawPlanFile) -> Result<()> {
    if plan.job.is_empty() {
        return Err(ReltimeError::ConfigError(
            "plan must contain at least one [job.<name>] section".to_string(),
        ));
    }
    Ok(())
}

// Self-references, mixed kinds and cycles are reported by the job and
// scheduler themselves; only dangling names are caught here.
fn validate_job_references(plan: &RawPlanFile) -> Result<()> {
    for (name, job) in plan.job.iter() {
        for dep in job.referenced_jobs() {
            if !plan.job.contains_key(dep) {
                return Err(ReltimeError::ConfigError(format!(
                    "job '{}' has unknown dependency '{}'",
                    name, dep
                )));
            }
        }
    }
    Ok(())
}
