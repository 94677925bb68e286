//! Content-addressed snapshot vault for CAD files.
//!
//! Snapshots are plain copies under a single directory, named after the
//! document code and a capture timestamp. Nothing in the vault is ever
//! overwritten or removed.

pub mod hasher;
pub mod store;

pub use hasher::{hash_bytes, hash_file};
pub use store::{VaultError, VaultStore};
