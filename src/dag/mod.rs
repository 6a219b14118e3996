// src/dag/mod.rs

//! Jobs, their dependency relations, and the resolution walk.
//!
//! - [`job`] holds a single job and its timing arithmetic.
//! - [`scheduler`] owns the jobs and performs the depth-first resolution
//!   with cycle detection.
//! - [`graph`] exposes the dependency graph for diagnostics (DOT output).

pub mod graph;
pub mod job;
pub mod scheduler;

pub use job::{Dependency, DependencyKind, Job};
pub use scheduler::Scheduler;
