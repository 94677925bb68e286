//! Interactive registration of a single CAD file.

use std::path::Path;

use cadvault_core::registry::RegisterOutcome;

use crate::RegisterArgs;

use super::{load_config, open_registry};

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &RegisterArgs) {
    let cfg = load_config(config, profile);
    let mut reg = open_registry(&cfg);

    match reg.register_or_update(&args.path, args.project) {
        Ok(RegisterOutcome::Registered { code, .. }) => {
            println!("Registered {} as {code}", args.path.display());
        }
        Ok(RegisterOutcome::Updated { code, .. }) => {
            println!("Content change folded into {code}; status reset to en_diseno");
        }
        Ok(RegisterOutcome::Unchanged { code, .. }) => {
            // Not an error from the user's point of view.
            println!("Already registered as {code}, content unchanged");
        }
        Err(e) => {
            eprintln!("Failed to register {}: {e}", args.path.display());
            std::process::exit(1);
        }
    }
}
