//! Foreground watch daemon.

use std::path::Path;

use cadvault_core::watch::WatchDaemon;

use super::{load_config, open_registry};

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    let cfg = load_config(config, profile);

    // The daemon is the one long-running command; logging goes through
    // tracing instead of plain prints.
    crate::logging::init(&cfg);

    let reg = open_registry(&cfg);
    let folders = match reg.active_watch_folders() {
        Ok(folders) => folders,
        Err(e) => {
            eprintln!("Failed to read watch folders: {e}");
            std::process::exit(1);
        }
    };
    if folders.is_empty() {
        // Folders added later are picked up by the daemon's config poll.
        tracing::warn!(
            "no active watch folders yet; add one with: cadv folders add <path>"
        );
    }

    tracing::info!(
        profile = %cfg.active_profile,
        folders = folders.len(),
        "starting watch daemon"
    );
    let daemon = WatchDaemon::new(reg, cfg.watcher.clone());
    if let Err(e) = daemon.run() {
        eprintln!("Watch daemon failed: {e}");
        std::process::exit(1);
    }
}
