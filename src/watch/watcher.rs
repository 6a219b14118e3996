// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use anyhow::Result;
use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::info;

use crate::watch::WatchEvent;

/// Handle for the filesystem watcher.
///
/// Keeps the underlying `RecommendedWatcher` alive. Dropping this handle
/// stops watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Watch the directory containing `plan_path` and send
/// [`WatchEvent::PlanChanged`] whenever the plan file itself is created or
/// modified.
///
/// The parent directory is watched rather than the file so that editors
/// which save by rename-and-replace keep being observed.
pub fn spawn_plan_watcher(
    plan_path: &Path,
    tx: mpsc::UnboundedSender<WatchEvent>,
) -> Result<WatcherHandle> {
    let dir = watch_dir(plan_path);
    let file_name = plan_path.file_name().map(|s| s.to_os_string());

    // Called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if !(event.kind.is_modify() || event.kind.is_create()) {
                    return;
                }
                let touches_plan = event
                    .paths
                    .iter()
                    .any(|p| p.file_name().map(|s| s.to_os_string()) == file_name);
                if touches_plan && tx.send(WatchEvent::PlanChanged).is_err() {
                    // We can't log via tracing here easily, so fallback to stderr.
                    eprintln!("reltime: watch loop has stopped; dropping plan change");
                }
            }
            Err(err) => {
                eprintln!("reltime: file watch error: {err}");
            }
        },
        Config::default(),
    )?;

    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    info!("plan watcher started on {:?}", dir);

    Ok(WatcherHandle { _inner: watcher })
}

/// Directory to watch for a plan path.
///
/// A bare filename like "Schedule.toml" (parent = "") falls back to the
/// current working directory.
fn watch_dir(plan_path: &Path) -> PathBuf {
    match plan_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
