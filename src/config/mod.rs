// src/config/mod.rs

//! Plan file loading and validation.
//!
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a plan file from disk (`loader.rs`).
//! - Validate job references (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_plan_path, load_and_validate, load_from_path, parse_plan};
pub use model::{JobConfig, PlanFile, RawPlanFile, ScheduleSection};
