// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;
pub mod types;
pub mod watch;

use std::path::Path;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::dag::Scheduler;
use crate::dag::graph::to_dot;
use crate::watch::{PlanFingerprint, WatchEvent, spawn_plan_watcher};

/// High-level entry point used by `main.rs`.
///
/// One-shot mode loads the plan, resolves it and prints the result.
/// With `--watch` the same happens again on every content change of the plan
/// file until Ctrl-C.
pub async fn run(args: CliArgs) -> Result<()> {
    let plan_path = args.plan.as_path();

    if args.watch {
        return watch_plan(plan_path, &args).await;
    }

    let output = evaluate(plan_path, &args)?;
    print!("{output}");
    Ok(())
}

/// Load, validate and (unless `--dry-run` / `--dot`) resolve the plan,
/// returning the text to print.
pub fn evaluate(plan_path: &Path, args: &CliArgs) -> crate::errors::Result<String> {
    let plan = load_and_validate(plan_path)?;

    if args.dry_run {
        debug!("dry-run complete (nothing resolved)");
        return Ok(report::render_plan(&plan));
    }

    let mut scheduler = Scheduler::from_plan(&plan, args.base_start_ms)?;

    if args.dot {
        return Ok(to_dot(&scheduler));
    }

    scheduler.resolve()?;
    report::render(&scheduler, args.format)
}

async fn watch_plan(plan_path: &Path, args: &CliArgs) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<WatchEvent>();
    let _watcher = spawn_plan_watcher(plan_path, tx.clone())?;

    // Ctrl-C → graceful shutdown.
    {
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(WatchEvent::ShutdownRequested);
        });
    }

    let mut fingerprint = PlanFingerprint::new();
    // Seed the first evaluation as if the plan had just changed.
    tx.send(WatchEvent::PlanChanged)?;

    while let Some(event) = rx.recv().await {
        match event {
            WatchEvent::ShutdownRequested => {
                info!("shutdown requested; stopping watch");
                break;
            }
            WatchEvent::PlanChanged => {
                match fingerprint.refresh(plan_path) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    Err(e) => {
                        error!("could not read plan: {e:#}");
                        continue;
                    }
                }

                info!(plan = ?plan_path, "plan changed; resolving");
                match evaluate(plan_path, args) {
                    Ok(output) => print!("{output}"),
                    Err(e) => error!("{e}"),
                }
            }
        }
    }

    Ok(())
}
