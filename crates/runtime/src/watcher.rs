use anyhow::{Context, Result};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher as NotifyWatcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use tracing::info;

/// Watches a scenario file and signals every modification.
///
/// The notify callback runs on its own thread; it only forwards a unit
/// message, and the frame loop drains the channel between step batches.
pub struct ScenarioWatcher {
    _watcher: RecommendedWatcher,
    changes: Receiver<()>,
}

impl ScenarioWatcher {
    /// True if the file changed since the last call.
    #[must_use]
    pub fn changed(&self) -> bool {
        let mut changed = false;
        while self.changes.try_recv().is_ok() {
            changed = true;
        }
        changed
    }
}

/// Start watching `path`. The parent directory is watched so editors that
/// replace the file instead of writing in place are still noticed.
///
/// # Errors
///
/// Fails if the path has no file name or the platform watcher cannot be
/// created.
pub fn start(path: &Path) -> Result<ScenarioWatcher> {
    info!("Initializing scenario watcher for {:?}...", path);

    let file_name = path
        .file_name()
        .with_context(|| format!("scenario path {} has no file name", path.display()))?
        .to_owned();
    let dir: PathBuf = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let (tx, changes) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
        Ok(event) => {
            if event.kind.is_modify() || event.kind.is_create() {
                let touched = event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name.as_os_str()));
                if touched {
                    // Receiver gone means the run is over.
                    let _ = tx.send(());
                }
            }
        }
        Err(e) => tracing::error!("Error watching scenario file: {e:?}"),
    })
    .context("failed to create file watcher")?;

    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("failed to watch {}", dir.display()))?;
    info!("Scenario watcher started for {:?}.", dir);
    Ok(ScenarioWatcher {
        _watcher: watcher,
        changes,
    })
}
