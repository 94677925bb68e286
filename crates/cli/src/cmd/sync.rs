//! Manual sync of watch folders.

use std::path::Path;

use cadvault_core::sync::{SyncEngine, SyncStats, folder_or_not_found};

use crate::SyncArgs;

use super::{load_config, open_registry};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &SyncArgs) {
    let cfg = load_config(config, profile);
    let mut reg = open_registry(&cfg);

    let result = match args.folder {
        Some(id) => {
            let folder = match folder_or_not_found(&reg, id) {
                Ok(folder) => folder,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            SyncEngine::new(&mut reg).sync_folder(&folder)
        }
        None => SyncEngine::new(&mut reg).sync_all(),
    };

    match result {
        Ok(stats) => print_stats(&stats),
        Err(e) => {
            eprintln!("Sync failed: {e}");
            std::process::exit(1);
        }
    }
}

fn print_stats(stats: &SyncStats) {
    println!(
        "Sync complete in {} ms: {} seen, {} new, {} updated, {} unchanged, {} skipped",
        stats.duration_ms,
        stats.seen,
        stats.new,
        stats.updated,
        stats.unchanged,
        stats.skipped,
    );
}
