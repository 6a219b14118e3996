// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_plan_path;

/// Command-line arguments for `reltime`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "reltime",
    version,
    about = "Resolve start and end times for jobs declared relative to each other.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the plan file (TOML).
    ///
    /// Default: `Schedule.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_plan_path())]
    pub plan: PathBuf,

    /// Override `[schedule].base_start_ms` from the plan.
    #[arg(long, value_name = "MS")]
    pub base_start_ms: Option<u64>,

    /// How resolved times are printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Print the dependency graph in Graphviz DOT format instead of times.
    #[arg(long)]
    pub dot: bool,

    /// Re-resolve whenever the plan file changes.
    #[arg(long)]
    pub watch: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `RELTIME_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate and print the plan, but don't resolve it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Output rendering for resolved times.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns, ordered by start time.
    Table,
    /// TOML document with one `[job.<name>]` table per job.
    Toml,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
