//! Watch folder management.

use std::path::Path;

use cadvault_core::registry::WatchFolder;
use tabled::{Table, Tabled, settings::Style};

use crate::FoldersCommand;

use super::{load_config, open_registry};

#[derive(Tabled)]
struct FolderRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Tool")]
    tool: String,
    #[tabled(rename = "Active")]
    active: &'static str,
    #[tabled(rename = "Last sync")]
    last_sync: String,
}

impl From<&WatchFolder> for FolderRow {
    fn from(folder: &WatchFolder) -> Self {
        Self {
            id: folder.id,
            path: folder.path.display().to_string(),
            tool: folder.tool.clone().unwrap_or_else(|| "-".to_string()),
            active: if folder.active { "yes" } else { "no" },
            last_sync: folder
                .last_sync
                .map_or_else(|| "never".to_string(), |t| {
                    t.format("%Y-%m-%d %H:%M").to_string()
                }),
        }
    }
}

pub fn run(config: Option<&Path>, profile: Option<&str>, command: FoldersCommand) {
    let cfg = load_config(config, profile);
    let mut reg = open_registry(&cfg);

    match command {
        FoldersCommand::Add { path, tool } => {
            if !path.is_dir() {
                eprintln!("Not a directory: {}", path.display());
                std::process::exit(1);
            }
            match reg.add_watch_folder(&path, tool.as_deref()) {
                Ok(folder) => {
                    println!("Watching folder {} (id {})", folder.path.display(), folder.id);
                }
                Err(e) => {
                    eprintln!("Failed to add folder: {e}");
                    std::process::exit(1);
                }
            }
        }
        FoldersCommand::List => match reg.db().list_watch_folders() {
            Ok(folders) => {
                if folders.is_empty() {
                    println!("(no watch folders configured)");
                    return;
                }
                let rows: Vec<FolderRow> = folders.iter().map(FolderRow::from).collect();
                let mut table = Table::new(rows);
                table.with(Style::sharp());
                println!("{table}");
            }
            Err(e) => {
                eprintln!("Failed to list folders: {e}");
                std::process::exit(1);
            }
        },
        FoldersCommand::Enable { id } => set_active(&reg, id, true),
        FoldersCommand::Disable { id } => set_active(&reg, id, false),
        FoldersCommand::Remove { id } => {
            if let Err(e) = reg.db().remove_watch_folder(id) {
                eprintln!("Failed to remove folder: {e}");
                std::process::exit(1);
            }
            println!("Folder {id} removed");
        }
    }
}

fn set_active(reg: &cadvault_core::registry::DocumentRegistry, id: i64, active: bool) {
    if let Err(e) = reg.db().set_folder_active(id, active) {
        eprintln!("Failed to update folder: {e}");
        std::process::exit(1);
    }
    println!("Folder {id} {}", if active { "enabled" } else { "disabled" });
}
