pub mod doctor;
pub mod folders;
pub mod list;
pub mod output;
pub mod recent;
pub mod register;
pub mod revision;
pub mod show;
pub mod status;
pub mod sync;
pub mod watch;

use std::path::Path;

use cadvault_core::config::loader::ConfigLoader;
use cadvault_core::config::types::ResolvedConfig;
use cadvault_core::registry::{Document, DocumentRegistry};

/// Load config, or exit with a message like every command does.
pub fn load_config(config: Option<&Path>, profile: Option<&str>) -> ResolvedConfig {
    match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    }
}

/// Open the registry for the resolved profile, creating the data dir.
pub fn open_registry(cfg: &ResolvedConfig) -> DocumentRegistry {
    if let Some(parent) = cfg.db_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Failed to create data directory {}: {e}", parent.display());
            std::process::exit(1);
        }
    }
    match DocumentRegistry::open(&cfg.db_path, &cfg.vault_dir) {
        Ok(reg) => reg,
        Err(e) => {
            eprintln!("Failed to open registry: {e}");
            std::process::exit(1);
        }
    }
}

/// Resolve a positional document argument that is either a numeric id or a
/// document code like PZA-2026-0012.
pub fn resolve_document(reg: &DocumentRegistry, arg: &str) -> Document {
    let found = if let Ok(id) = arg.parse::<i64>() {
        reg.document_by_id(id)
    } else {
        reg.db().document_by_code(arg).map_err(Into::into)
    };

    match found {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            eprintln!("No document matching '{arg}'");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Failed to look up document: {e}");
            std::process::exit(1);
        }
    }
}
