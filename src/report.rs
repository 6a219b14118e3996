// src/report.rs

//! Rendering of plans and resolved schedules for the CLI.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::model::PlanFile;
use crate::dag::Scheduler;
use crate::errors::Result;
use crate::types::JobTimes;

#[derive(Debug, Serialize)]
struct ScheduleReport<'a> {
    base_start_ms: u64,
    job: BTreeMap<&'a str, JobTimes>,
}

/// Render the resolved times of every registered job.
///
/// Fails with `NotYetResolved` if any job lacks timing.
pub fn render(scheduler: &Scheduler, format: OutputFormat) -> Result<String> {
    let mut rows = Vec::with_capacity(scheduler.len());
    for job in scheduler.jobs() {
        rows.push((job.name(), scheduler.times_of(job.name())?));
    }

    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Toml => {
            let report = ScheduleReport {
                base_start_ms: scheduler.base_start_ms(),
                job: rows.into_iter().collect(),
            };
            Ok(toml::to_string(&report)?)
        }
    }
}

fn render_table(mut rows: Vec<(&str, JobTimes)>) -> String {
    rows.sort_by(|a, b| {
        (a.1.start_ms, a.1.end_ms, a.0).cmp(&(b.1.start_ms, b.1.end_ms, b.0))
    });

    let width = rows
        .iter()
        .map(|(name, _)| name.len())
        .max()
        .unwrap_or(0)
        .max("job".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<width$}  {:>12}  {:>12}  {:>12}",
        "job", "start_ms", "duration_ms", "end_ms"
    );
    for (name, t) in rows {
        let _ = writeln!(
            out,
            "{:<width$}  {:>12}  {:>12}  {:>12}",
            name, t.start_ms, t.duration_ms, t.end_ms
        );
    }
    out
}

/// Dry-run output: the plan as understood after validation.
pub fn render_plan(plan: &PlanFile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "reltime dry-run");
    let _ = writeln!(out, "  schedule.base_start_ms = {}", plan.schedule.base_start_ms);
    let _ = writeln!(out);

    let _ = writeln!(out, "jobs ({}):", plan.job.len());
    for (name, job) in plan.job.iter() {
        let _ = writeln!(out, "  - {name}");
        let _ = writeln!(out, "      duration_ms: {}", job.duration_ms);
        if job.delay_ms > 0 {
            let _ = writeln!(out, "      delay_ms: {}", job.delay_ms);
        }
        if let Some(ref peers) = job.after_start {
            let _ = writeln!(out, "      after_start: {:?}", peers);
        }
        if let Some(ref peers) = job.after_end {
            let _ = writeln!(out, "      after_end: {:?}", peers);
        }
    }
    out
}
