use cadvault_core::config::loader::{ConfigLoader, default_config_path};
use cadvault_core::registry::RegistryDb;
use std::path::Path;

pub fn run(config: Option<&Path>, profile: Option<&str>) {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => {
            println!("OK   cadv doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("profile: {}", rc.active_profile);
            println!("data_dir: {}", rc.data_dir.display());
            println!("db_path: {}", rc.db_path.display());
            println!("vault_dir: {}", rc.vault_dir.display());
            println!("watcher.debounce_ms: {}", rc.watcher.debounce_ms);
            println!("watcher.config_poll_secs: {}", rc.watcher.config_poll_secs);

            // Only report on an existing database; doctor never creates one.
            if rc.db_path.exists() {
                match RegistryDb::open(&rc.db_path) {
                    Ok(db) => {
                        let documents = db.count_documents().unwrap_or(0);
                        let folders =
                            db.list_watch_folders().map(|f| f.len()).unwrap_or(0);
                        println!("documents: {documents}");
                        println!("watch folders: {folders}");
                        for (status, count) in db.status_counts().unwrap_or_default() {
                            println!("  {}: {count}", status.as_str());
                        }
                    }
                    Err(e) => {
                        println!("FAIL registry: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                println!("registry: not created yet");
            }
        }
        Err(e) => {
            println!("FAIL cadv doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
