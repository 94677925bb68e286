//! Detail view of a single document.

use std::path::Path;

use cadvault_core::registry::{Document, LogEntry, Revision};
use serde::Serialize;

use crate::ShowArgs;

use super::output::print_json;
use super::{load_config, open_registry, resolve_document};

#[derive(Serialize)]
struct ShowOutput {
    document: Document,
    revisions: Vec<Revision>,
    log: Vec<LogEntry>,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ShowArgs) {
    let cfg = load_config(config, profile);
    let reg = open_registry(&cfg);
    let doc = resolve_document(&reg, &args.document);

    let revisions = match reg.revisions_for(doc.id) {
        Ok(revisions) => revisions,
        Err(e) => {
            eprintln!("Failed to read revisions: {e}");
            std::process::exit(1);
        }
    };
    let log = match reg.log_for(doc.id, 50) {
        Ok(log) => log,
        Err(e) => {
            eprintln!("Failed to read audit log: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        print_json(&ShowOutput { document: doc, revisions, log });
        return;
    }

    println!("{}  {}", doc.code, doc.name);
    println!("kind: {}  tool: {}", doc.kind.as_str(), doc.tool.as_str());
    println!("status: {}", doc.status.as_str());
    println!("source: {}", doc.source_path.display());
    println!("snapshot: {}", doc.vault_file);
    println!("hash: {}", doc.content_hash);
    if let Some(project) = doc.project_id {
        println!("project: {project}");
    }
    println!("registered: {}", doc.created_at.format("%Y-%m-%d %H:%M"));
    println!("modified:   {}", doc.modified_at.format("%Y-%m-%d %H:%M"));

    println!();
    println!("Revisions:");
    for rev in &revisions {
        let note = rev.change_note.as_deref().unwrap_or("-");
        println!(
            "  {}  {}  {}  {}",
            rev.label,
            rev.status.as_str(),
            rev.created_at.format("%Y-%m-%d %H:%M"),
            note,
        );
    }

    println!();
    println!("Log:");
    for entry in &log {
        println!(
            "  {}  {:<16} {}",
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.action.as_str(),
            entry.detail,
        );
    }
}
