//! List command implementation.

use std::path::Path;

use cadvault_core::registry::{DocStatus, DocumentKind, DocumentQuery};

use crate::ListArgs;

use super::output::{print_document_table, print_json};
use super::{load_config, open_registry};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ListArgs) {
    let cfg = load_config(config, profile);
    let reg = open_registry(&cfg);

    let kind = args.kind.as_deref().map(|s| match DocumentKind::parse(s) {
        Some(kind) => kind,
        None => {
            eprintln!("Unknown kind '{s}' (expected piece, assembly, drawing, bom, other)");
            std::process::exit(2);
        }
    });
    let status = args.status.as_deref().map(|s| match DocStatus::parse(s) {
        Some(status) => status,
        None => {
            eprintln!(
                "Unknown status '{s}' (expected en_diseno, revision, aprobado, liberado, obsoleto)"
            );
            std::process::exit(2);
        }
    });

    let query =
        DocumentQuery { kind, status, project_id: args.project, limit: args.limit };

    let docs = match reg.query_documents(&query) {
        Ok(docs) => docs,
        Err(e) => {
            eprintln!("Failed to query documents: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        print_json(&docs);
    } else {
        print_document_table(&docs, "(no documents found)");
    }
}
