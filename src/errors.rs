// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::dag::job::DependencyKind;
use crate::types::JobName;

#[derive(Error, Debug)]
pub enum ReltimeError {
    #[error("job '{job}' already has an {existing} dependency; cannot also declare {requested}")]
    ConflictingDependencyKind {
        job: JobName,
        existing: DependencyKind,
        requested: DependencyKind,
    },

    #[error("job '{0}' cannot depend on itself")]
    SelfDependency(JobName),

    #[error("dependency cycle in jobs detected: {}", .path.join(" -> "))]
    DependencyCycle { path: Vec<JobName> },

    #[error("job '{job}' depends on '{dependency}', which was never registered")]
    UnknownDependency { job: JobName, dependency: JobName },

    #[error("Job not found: {0}")]
    UnknownJob(JobName),

    #[error("job '{0}' has not been resolved yet")]
    NotYetResolved(JobName),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML rendering error: {0}")]
    TomlRenderError(#[from] toml::ser::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, ReltimeError>;
