use std::path::Path;

use crate::RecentArgs;

use super::output::{print_document_table, print_json};
use super::{load_config, open_registry};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &RecentArgs) {
    let cfg = load_config(config, profile);
    let reg = open_registry(&cfg);

    let docs = match reg.list_recent(args.limit) {
        Ok(docs) => docs,
        Err(e) => {
            eprintln!("Failed to query documents: {e}");
            std::process::exit(1);
        }
    };

    if args.json {
        print_json(&docs);
    } else {
        print_document_table(&docs, "(registry is empty)");
    }
}
