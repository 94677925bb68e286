//! Append-only, content-addressed snapshot storage.
//!
//! Every successful register or update copies the source file into the
//! vault directory under a name embedding the document code and a
//! timestamp. Nothing in this crate ever overwrites or removes a vault
//! file; the directory is the durable version history the authoring tools
//! do not provide.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// How many collision fallbacks to try before giving up on a name.
const MAX_NAME_ATTEMPTS: u32 = 100;

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("failed to create vault directory {0}: {1}")]
    CreateDir(String, #[source] io::Error),

    #[error("failed to copy {0} into vault: {1}")]
    Copy(String, #[source] io::Error),

    #[error("could not find a free snapshot name for {0}")]
    NameExhausted(String),

    #[error("failed to read vault directory {0}: {1}")]
    ReadDir(String, #[source] io::Error),
}

/// Handle to a vault directory.
#[derive(Debug, Clone)]
pub struct VaultStore {
    dir: PathBuf,
}

impl VaultStore {
    /// Open a vault, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Self, VaultError> {
        fs::create_dir_all(dir)
            .map_err(|e| VaultError::CreateDir(dir.display().to_string(), e))?;
        Ok(Self { dir: dir.to_path_buf() })
    }

    /// The vault directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Copy `source` into the vault under a fresh snapshot name.
    ///
    /// The name embeds the document code, a timestamp, and a `_rev_` marker
    /// when the snapshot records a content update rather than the initial
    /// registration. An existing name is never overwritten; a numeric
    /// disambiguator is appended instead.
    pub fn store(
        &self,
        source: &Path,
        code: &str,
        is_update: bool,
    ) -> Result<String, VaultError> {
        self.store_at(source, code, is_update, Utc::now())
    }

    /// Same as [`store`](Self::store) with an explicit timestamp, for tests.
    pub fn store_at(
        &self,
        source: &Path,
        code: &str,
        is_update: bool,
        when: DateTime<Utc>,
    ) -> Result<String, VaultError> {
        let ext = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
            .unwrap_or_default();
        let marker = if is_update { "_rev" } else { "" };
        let stamp = when.format("%Y%m%d_%H%M%S");
        let base = format!("{code}{marker}_{stamp}");

        let mut reader = File::open(source)
            .map_err(|e| VaultError::Copy(source.display().to_string(), e))?;

        for attempt in 0..MAX_NAME_ATTEMPTS {
            let name = if attempt == 0 {
                format!("{base}{ext}")
            } else {
                format!("{base}-{attempt}{ext}")
            };

            let target_path = self.dir.join(&name);
            match OpenOptions::new().write(true).create_new(true).open(&target_path) {
                Ok(mut target) => {
                    if let Err(e) = io::copy(&mut reader, &mut target) {
                        // A half-written snapshot must not pass for history.
                        drop(target);
                        let _ = fs::remove_file(&target_path);
                        return Err(VaultError::Copy(source.display().to_string(), e));
                    }
                    return Ok(name);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(VaultError::Copy(source.display().to_string(), e));
                }
            }
        }

        Err(VaultError::NameExhausted(base))
    }

    /// Number of snapshots currently held.
    pub fn snapshot_count(&self) -> Result<usize, VaultError> {
        let entries = fs::read_dir(&self.dir)
            .map_err(|e| VaultError::ReadDir(self.dir.display().to_string(), e))?;
        Ok(entries.filter_map(|e| e.ok()).filter(|e| e.path().is_file()).count())
    }
}
