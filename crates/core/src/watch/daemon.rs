//! The watch-folder daemon.
//!
//! Turns OS-level filesystem notifications into register-or-update calls.
//! notify's callback threads only push events onto a channel; the loop
//! thread owns the registry connection and performs every mutation, so
//! passive events, the periodic config reload, and the startup catch-up
//! pass are all serialized through one consumer.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;

use crate::config::types::WatcherConfig;
use crate::extensions;
use crate::registry::{DocumentRegistry, RegisterOutcome, RegistryError};
use crate::sync::{SyncEngine, SyncError};

use super::debouncer::Debouncer;
use super::stability::wait_for_stable;

/// Channel poll granularity; bounds how stale the debouncer sweep can get.
const TICK: Duration = Duration::from_millis(200);

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("file watcher error: {0}")]
    Notify(#[from] notify::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Sync(#[from] SyncError),
}

/// Long-running watcher over all active watch folders.
pub struct WatchDaemon {
    registry: DocumentRegistry,
    options: WatcherConfig,
}

impl WatchDaemon {
    pub fn new(registry: DocumentRegistry, options: WatcherConfig) -> Self {
        Self { registry, options }
    }

    /// Run the event loop. Only returns on a watcher channel breakdown;
    /// per-event and per-reload failures are logged and survived.
    pub fn run(mut self) -> Result<(), WatchError> {
        let (tx, rx) = mpsc::channel();
        let mut watcher =
            notify::recommended_watcher(move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            })?;

        let mut watched: HashSet<PathBuf> = HashSet::new();
        self.watch_active_folders(&mut watcher, &mut watched)?;

        // Catch up on whatever happened while the daemon was down.
        match SyncEngine::new(&mut self.registry).sync_all() {
            Ok(stats) => tracing::info!(
                new = stats.new,
                updated = stats.updated,
                "startup catch-up pass complete"
            ),
            Err(e) => tracing::error!("startup catch-up pass failed: {e}"),
        }

        let mut debouncer = Debouncer::new(self.options.debounce_ms);
        let reload_every = Duration::from_secs(self.options.config_poll_secs);
        let mut last_reload = Instant::now();

        tracing::info!(folders = watched.len(), "watch daemon started");

        loop {
            match rx.recv_timeout(TICK) {
                Ok(Ok(event)) => {
                    for path in event_paths(&event) {
                        debouncer.record(path);
                    }
                }
                Ok(Err(e)) => tracing::error!("file watch error: {e}"),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => break,
            }

            for path in debouncer.take_ready() {
                self.process(&path);
            }

            // Pick up folders added from the ERP without a restart.
            if last_reload.elapsed() >= reload_every {
                last_reload = Instant::now();
                if let Err(e) = self.watch_active_folders(&mut watcher, &mut watched) {
                    tracing::error!("watch folder reload failed, will retry: {e}");
                }
            }
        }

        tracing::info!("watch daemon stopped");
        Ok(())
    }

    /// Handle one settled path. Never propagates: a bad file must not take
    /// the daemon down.
    fn process(&mut self, path: &Path) {
        if !path.exists() {
            // Move source or a deletion; the destination event covers moves.
            return;
        }

        let interval = Duration::from_millis(self.options.stability_interval_ms);
        match wait_for_stable(path, interval, self.options.stability_checks) {
            Ok(true) => {}
            Ok(false) => {
                tracing::debug!("still being written, deferred: {}", path.display());
                return;
            }
            Err(e) => {
                tracing::warn!("cannot stat {}: {e}", path.display());
                return;
            }
        }

        match self.registry.register_or_update(path, None) {
            Ok(RegisterOutcome::Registered { code, .. }) => {
                tracing::info!(code = %code, "new: {}", path.display());
            }
            Ok(RegisterOutcome::Updated { code, .. }) => {
                tracing::info!(code = %code, "changed: {}", path.display());
            }
            Ok(RegisterOutcome::Unchanged { .. }) => {
                tracing::debug!("no change: {}", path.display());
            }
            Err(e) => {
                tracing::error!("failed to process {}: {e}", path.display());
            }
        }
    }

    /// Begin watching any active folder not yet covered. Folders that fail
    /// to attach are retried on the next reload.
    fn watch_active_folders(
        &mut self,
        watcher: &mut RecommendedWatcher,
        watched: &mut HashSet<PathBuf>,
    ) -> Result<(), WatchError> {
        for folder in self.registry.active_watch_folders()? {
            if watched.contains(&folder.path) {
                continue;
            }
            if !folder.path.exists() {
                tracing::warn!("watch folder missing: {}", folder.path.display());
                continue;
            }
            match watcher.watch(&folder.path, RecursiveMode::Recursive) {
                Ok(()) => {
                    tracing::info!("watching {}", folder.path.display());
                    watched.insert(folder.path);
                }
                Err(e) => {
                    tracing::warn!("cannot watch {}: {e}", folder.path.display());
                }
            }
        }
        Ok(())
    }
}

/// Paths worth processing from a notify event: create/modify/rename
/// notifications carrying a recognized extension. A move is treated as a
/// create at the destination; the vanished source path is dropped later by
/// the existence check.
pub(crate) fn event_paths(event: &Event) -> Vec<PathBuf> {
    match event.kind {
        EventKind::Create(_) | EventKind::Modify(_) => event
            .paths
            .iter()
            .filter(|p| extensions::recognize(p).is_some())
            .cloned()
            .collect(),
        _ => Vec::new(),
    }
}
