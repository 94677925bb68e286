use std::path::Path;

use cadvault_core::registry::DocStatus;

use crate::StatusArgs;

use super::{load_config, open_registry, resolve_document};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &StatusArgs) {
    let Some(status) = DocStatus::parse(&args.status) else {
        eprintln!(
            "Unknown status '{}' (expected en_diseno, revision, aprobado, liberado, obsoleto)",
            args.status
        );
        std::process::exit(2);
    };

    let cfg = load_config(config, profile);
    let mut reg = open_registry(&cfg);
    let doc = resolve_document(&reg, &args.document);

    match reg.change_status(doc.id, status) {
        Ok(entry) => println!("{}: {}", doc.code, entry.detail),
        Err(e) => {
            eprintln!("Failed to change status: {e}");
            std::process::exit(1);
        }
    }
}
