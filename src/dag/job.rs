// src/dag/job.rs

//! A named job and the relative constraint that anchors its start time.

use std::fmt;

use tracing::debug;

use crate::errors::{ReltimeError, Result};
use crate::types::{JobName, JobTimes};

/// Which edge of its peers a job's start is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    None,
    AfterStart,
    AfterEnd,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DependencyKind::None => "none",
            DependencyKind::AfterStart => "after_start",
            DependencyKind::AfterEnd => "after_end",
        };
        f.write_str(s)
    }
}

/// Dependency relation of a job.
///
/// A job has at most one kind of relation. Peers are held by name and looked
/// up in the owning [`Scheduler`](crate::dag::Scheduler) at resolution time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Dependency {
    #[default]
    None,
    /// Start no earlier than the latest start among the peers.
    AfterStart(Vec<JobName>),
    /// Start no earlier than the latest end among the peers.
    AfterEnd(Vec<JobName>),
}

impl Dependency {
    pub fn kind(&self) -> DependencyKind {
        match self {
            Dependency::None => DependencyKind::None,
            Dependency::AfterStart(_) => DependencyKind::AfterStart,
            Dependency::AfterEnd(_) => DependencyKind::AfterEnd,
        }
    }

    pub fn peers(&self) -> &[JobName] {
        match self {
            Dependency::None => &[],
            Dependency::AfterStart(peers) | Dependency::AfterEnd(peers) => peers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Timing {
    start_ms: u64,
    end_ms: u64,
}

/// A unit of work with a duration and a start time derived from its peers.
///
/// Timing is `None` until the scheduler resolves the job.
#[derive(Debug, Clone)]
pub struct Job {
    name: JobName,
    duration_ms: u64,
    delay_ms: u64,
    dependency: Dependency,
    timing: Option<Timing>,
}

impl Job {
    pub fn new(name: impl Into<JobName>, duration_ms: u64) -> Self {
        Self {
            name: name.into(),
            duration_ms,
            delay_ms: 0,
            dependency: Dependency::None,
            timing: None,
        }
    }

    /// Fixed offset added on top of whatever the job is anchored to.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn dependency(&self) -> &Dependency {
        &self.dependency
    }

    /// Names of the peers in the active dependency relation.
    pub fn dependencies(&self) -> &[JobName] {
        self.dependency.peers()
    }

    pub fn is_resolved(&self) -> bool {
        self.timing.is_some()
    }

    pub fn start_ms(&self) -> Option<u64> {
        self.timing.map(|t| t.start_ms)
    }

    pub fn end_ms(&self) -> Option<u64> {
        self.timing.map(|t| t.end_ms)
    }

    pub fn times(&self) -> Option<JobTimes> {
        self.timing.map(|t| JobTimes {
            start_ms: t.start_ms,
            duration_ms: self.duration_ms,
            end_ms: t.end_ms,
        })
    }

    /// Anchor this job's start to the latest start among `peers`.
    ///
    /// Replaces any earlier `after_start` declaration. Fails without touching
    /// the job if it is already anchored to peer ends, or if `peers` names the
    /// job itself.
    pub fn declare_after_start<I, S>(&mut self, peers: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<JobName>,
    {
        let peers = self.checked_peers(DependencyKind::AfterStart, peers)?;
        self.dependency = Dependency::AfterStart(peers);
        Ok(())
    }

    /// Anchor this job's start to the latest end among `peers`.
    ///
    /// Mirror image of [`Job::declare_after_start`].
    pub fn declare_after_end<I, S>(&mut self, peers: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<JobName>,
    {
        let peers = self.checked_peers(DependencyKind::AfterEnd, peers)?;
        self.dependency = Dependency::AfterEnd(peers);
        Ok(())
    }

    fn checked_peers<I, S>(&self, requested: DependencyKind, peers: I) -> Result<Vec<JobName>>
    where
        I: IntoIterator<Item = S>,
        S: Into<JobName>,
    {
        let existing = self.dependency.kind();
        if existing != DependencyKind::None && existing != requested {
            return Err(ReltimeError::ConflictingDependencyKind {
                job: self.name.clone(),
                existing,
                requested,
            });
        }

        let peers: Vec<JobName> = peers.into_iter().map(Into::into).collect();
        if peers.iter().any(|peer| *peer == self.name) {
            return Err(ReltimeError::SelfDependency(self.name.clone()));
        }

        Ok(peers)
    }

    /// Compute and store this job's timing.
    ///
    /// `anchor_ms` is the latest relevant peer time (start or end depending on
    /// the dependency kind), or `None` when the job has no peers. The anchor
    /// is floored at `base_start_ms`.
    pub(crate) fn resolve_timing(&mut self, base_start_ms: u64, anchor_ms: Option<u64>) {
        let floor = anchor_ms.map_or(base_start_ms, |anchor| anchor.max(base_start_ms));
        let start_ms = floor.saturating_add(self.delay_ms);
        let end_ms = start_ms.saturating_add(self.duration_ms);

        debug!(
            job = %self.name,
            kind = %self.dependency.kind(),
            start_ms,
            end_ms,
            "job timing resolved"
        );

        self.timing = Some(Timing { start_ms, end_ms });
    }
}
