use std::path::Path;

use crate::RevisionArgs;

use super::{load_config, open_registry, resolve_document};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &RevisionArgs) {
    let cfg = load_config(config, profile);
    let mut reg = open_registry(&cfg);
    let doc = resolve_document(&reg, &args.document);

    match reg.add_revision(doc.id, args.message.as_deref()) {
        Ok(label) => println!("{}: revision {label} recorded", doc.code),
        Err(e) => {
            eprintln!("Failed to add revision: {e}");
            std::process::exit(1);
        }
    }
}
