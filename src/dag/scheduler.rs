use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::config::model::PlanFile;
use crate::dag::job::{DependencyKind, Job};
use crate::errors::{ReltimeError, Result};
use crate::types::{JobName, JobTimes};

/// Scheduler owns the registered jobs and resolves their timing.
///
/// Jobs live in an insertion-ordered arena; dependencies are followed by name
/// through `index`. Resolution is a depth-first walk from every registered
/// job in order:
/// - `visited` persists across all roots of one [`Scheduler::resolve`] call
/// - an `on_stack` set is created fresh for each root
///
/// A dependency that is on the current root's stack but not yet resolved is a
/// back edge, i.e. a cycle.
#[derive(Debug)]
pub struct Scheduler {
    base_start_ms: u64,
    jobs: Vec<Job>,
    index: HashMap<JobName, usize>,
    visited: HashSet<JobName>,
}

impl Scheduler {
    pub fn new(base_start_ms: u64) -> Self {
        Self {
            base_start_ms,
            jobs: Vec::new(),
            index: HashMap::new(),
            visited: HashSet::new(),
        }
    }

    /// Construct a scheduler from a validated [`PlanFile`].
    ///
    /// Dependencies are declared through [`Job::declare_after_start`] /
    /// [`Job::declare_after_end`], so a job listing itself or using both
    /// kinds fails here with the corresponding job error.
    pub fn from_plan(plan: &PlanFile, base_start_override: Option<u64>) -> Result<Self> {
        let base_start_ms = base_start_override.unwrap_or(plan.schedule.base_start_ms);
        let mut scheduler = Self::new(base_start_ms);

        for (name, cfg) in plan.job.iter() {
            let mut job = Job::new(name.clone(), cfg.duration_ms).with_delay(cfg.delay_ms);
            if let Some(ref peers) = cfg.after_start {
                job.declare_after_start(peers.iter().cloned())?;
            }
            if let Some(ref peers) = cfg.after_end {
                job.declare_after_end(peers.iter().cloned())?;
            }
            scheduler.register(job);
        }

        Ok(scheduler)
    }

    pub fn base_start_ms(&self) -> u64 {
        self.base_start_ms
    }

    /// Add a job to the schedule.
    ///
    /// A job whose name is already registered replaces the earlier one in
    /// its original position.
    pub fn register(&mut self, job: Job) {
        match self.index.get(job.name()) {
            Some(&slot) => {
                warn!(job = %job.name(), "job registered twice; keeping the latest definition");
                self.jobs[slot] = job;
            }
            None => {
                self.index.insert(job.name().to_string(), self.jobs.len());
                self.jobs.push(job);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Registered jobs in registration order.
    pub fn jobs(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    pub fn job(&self, name: &str) -> Option<&Job> {
        self.index.get(name).map(|&slot| &self.jobs[slot])
    }

    /// Resolve start and end times for every registered job.
    ///
    /// Stops at the first cycle found. Jobs resolved before that keep their
    /// times, but the call as a whole fails.
    pub fn resolve(&mut self) -> Result<()> {
        info!(
            jobs = self.jobs.len(),
            base_start_ms = self.base_start_ms,
            "resolving schedule"
        );

        for slot in 0..self.jobs.len() {
            if self.visited.contains(self.jobs[slot].name()) {
                continue;
            }
            let mut on_stack = HashSet::new();
            if let Err(e) = self.visit(slot, &mut on_stack) {
                self.forget_unresolved(&on_stack);
                return Err(e);
            }
        }

        info!(jobs = self.jobs.len(), "schedule resolved");
        Ok(())
    }

    /// Resolved `(start, duration, end)` for a job.
    pub fn times_of(&self, name: &str) -> Result<JobTimes> {
        let job = self
            .job(name)
            .ok_or_else(|| ReltimeError::UnknownJob(name.to_string()))?;
        job.times()
            .ok_or_else(|| ReltimeError::NotYetResolved(name.to_string()))
    }

    /// Depth-first walk from `root` using an explicit frame stack.
    ///
    /// Each frame is `(slot, next_dep)`: the job being visited and the index
    /// of the next dependency to descend into. A job's timing is computed
    /// when its frame is popped, so all of its dependencies are resolved by
    /// then. `path` mirrors the frame stack by name for cycle reporting.
    fn visit(&mut self, root: usize, on_stack: &mut HashSet<JobName>) -> Result<()> {
        let mut frames: Vec<(usize, usize)> = Vec::new();
        let mut path: Vec<JobName> = Vec::new();

        self.enter(root, on_stack, &mut path);
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let (slot, next_dep) = *frame;

            let Some(dep) = self.jobs[slot].dependencies().get(next_dep).cloned() else {
                let anchor_ms = self.anchor_of(slot);
                let base_start_ms = self.base_start_ms;
                self.jobs[slot].resolve_timing(base_start_ms, anchor_ms);
                path.pop();
                frames.pop();
                continue;
            };
            frame.1 += 1;

            let dep_slot = self.slot_of_dependency(self.jobs[slot].name(), &dep)?;

            if on_stack.contains(&dep) && !self.jobs[dep_slot].is_resolved() {
                let mut cycle: Vec<JobName> =
                    path.iter().skip_while(|n| **n != dep).cloned().collect();
                cycle.push(dep.clone());
                warn!(
                    job = %self.jobs[slot].name(),
                    dependency = %dep,
                    "back edge found; aborting resolution"
                );
                return Err(ReltimeError::DependencyCycle { path: cycle });
            }

            if self.visited.contains(&dep) {
                continue;
            }

            self.enter(dep_slot, on_stack, &mut path);
            frames.push((dep_slot, 0));
        }

        Ok(())
    }

    fn enter(&mut self, slot: usize, on_stack: &mut HashSet<JobName>, path: &mut Vec<JobName>) {
        let name = self.jobs[slot].name().to_string();
        debug!(job = %name, "visiting job");
        self.visited.insert(name.clone());
        on_stack.insert(name.clone());
        path.push(name);
    }

    /// Drop jobs of an aborted walk from `visited` so a later `resolve()`
    /// walks them again instead of skipping them unresolved.
    fn forget_unresolved(&mut self, on_stack: &HashSet<JobName>) {
        for name in on_stack {
            if self.job(name).is_some_and(|job| !job.is_resolved()) {
                self.visited.remove(name);
            }
        }
    }

    fn slot_of_dependency(&self, job: &str, dependency: &str) -> Result<usize> {
        self.index
            .get(dependency)
            .copied()
            .ok_or_else(|| ReltimeError::UnknownDependency {
                job: job.to_string(),
                dependency: dependency.to_string(),
            })
    }

    /// Latest relevant peer time for the job in `slot`; all peers must
    /// already be resolved.
    fn anchor_of(&self, slot: usize) -> Option<u64> {
        let job = &self.jobs[slot];
        let peers = job.dependencies().iter().filter_map(|n| self.job(n));

        match job.dependency().kind() {
            DependencyKind::None => None,
            DependencyKind::AfterStart => peers.filter_map(Job::start_ms).max(),
            DependencyKind::AfterEnd => peers.filter_map(Job::end_ms).max(),
        }
    }
}
