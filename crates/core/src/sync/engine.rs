//! One-shot reconciliation of watch folders against the registry.
//!
//! Used both by the manual "sync now" action and by the daemon's periodic
//! catch-up. Enumerates a folder's immediate entries, feeds recognized
//! files through the registry's register-or-update primitive, and counts
//! outcomes. Per-file failures are logged and skipped; only a storage
//! failure aborts the pass.

use thiserror::Error;
use walkdir::WalkDir;

use crate::extensions;
use crate::registry::{
    DbError, DocumentRegistry, RegisterOutcome, RegistryError, WatchFolder,
};

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("watch folder does not exist: {0}")]
    MissingFolder(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Db(#[from] DbError),
}

/// Counters from a sync pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncStats {
    /// Recognized files considered.
    pub seen: usize,
    /// Documents newly registered.
    pub new: usize,
    /// Documents whose content changed.
    pub updated: usize,
    /// Files whose hash matched the registry.
    pub unchanged: usize,
    /// Files skipped on a transient read/copy failure.
    pub skipped: usize,
    /// Pass duration in milliseconds.
    pub duration_ms: u64,
}

impl SyncStats {
    fn absorb(&mut self, other: &SyncStats) {
        self.seen += other.seen;
        self.new += other.new;
        self.updated += other.updated;
        self.unchanged += other.unchanged;
        self.skipped += other.skipped;
    }
}

/// Reconciles folder contents against the registry.
pub struct SyncEngine<'a> {
    registry: &'a mut DocumentRegistry,
}

impl<'a> SyncEngine<'a> {
    pub fn new(registry: &'a mut DocumentRegistry) -> Self {
        Self { registry }
    }

    /// Sync one folder. The folder's last-sync stamp is updated when the
    /// pass completes, even if individual files were skipped.
    pub fn sync_folder(&mut self, folder: &WatchFolder) -> Result<SyncStats, SyncError> {
        if !folder.path.exists() {
            return Err(SyncError::MissingFolder(folder.path.display().to_string()));
        }

        let start = std::time::Instant::now();
        let mut stats = SyncStats::default();

        // Immediate entries only; subdirectories belong to their own folders.
        for entry in WalkDir::new(&folder.path).max_depth(1).follow_links(false) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("skipping unreadable entry: {e}");
                    stats.skipped += 1;
                    continue;
                }
            };

            if entry.depth() == 0 || entry.path().is_dir() {
                continue;
            }
            if extensions::recognize(entry.path()).is_none() {
                continue;
            }

            stats.seen += 1;
            match self.registry.register_or_update(entry.path(), None) {
                Ok(RegisterOutcome::Registered { .. }) => stats.new += 1,
                Ok(RegisterOutcome::Updated { .. }) => stats.updated += 1,
                Ok(RegisterOutcome::Unchanged { .. }) => stats.unchanged += 1,
                Err(e @ (RegistryError::Io { .. } | RegistryError::Vault(_))) => {
                    tracing::warn!("skipping {}: {e}", entry.path().display());
                    stats.skipped += 1;
                }
                Err(RegistryError::Unsupported { .. }) => {
                    // Filtered above; a race with a rename lands here.
                    stats.skipped += 1;
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.registry.touch_folder_sync(folder.id)?;
        stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            folder = %folder.path.display(),
            new = stats.new,
            updated = stats.updated,
            skipped = stats.skipped,
            "sync complete"
        );
        Ok(stats)
    }

    /// Sync every active folder, aggregating counters. A missing folder
    /// (an unplugged network share, say) is skipped, not fatal.
    pub fn sync_all(&mut self) -> Result<SyncStats, SyncError> {
        let start = std::time::Instant::now();
        let folders = self.registry.active_watch_folders()?;
        let mut total = SyncStats::default();

        for folder in &folders {
            match self.sync_folder(folder) {
                Ok(stats) => total.absorb(&stats),
                Err(SyncError::MissingFolder(path)) => {
                    tracing::warn!("watch folder missing, skipped: {path}");
                }
                Err(e) => return Err(e),
            }
        }

        total.duration_ms = start.elapsed().as_millis() as u64;
        Ok(total)
    }
}

/// Convenience check used by callers that validate a folder id first.
pub fn folder_or_not_found(
    registry: &DocumentRegistry,
    id: i64,
) -> Result<WatchFolder, SyncError> {
    registry
        .folder_by_id(id)
        .map_err(SyncError::Registry)?
        .ok_or(SyncError::Registry(RegistryError::FolderNotFound(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{DocStatus, RegistryDb};
    use crate::vault::VaultStore;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn registry(tmp: &TempDir) -> DocumentRegistry {
        let db = RegistryDb::open_in_memory().unwrap();
        let vault = VaultStore::open(&tmp.path().join("vault")).unwrap();
        DocumentRegistry::new(db, vault)
    }

    fn add_folder(reg: &mut DocumentRegistry, path: &Path) -> WatchFolder {
        reg.add_watch_folder(path, None).unwrap()
    }

    #[test]
    fn test_sync_registers_recognized_files_only() {
        let tmp = TempDir::new().unwrap();
        let inbox = tmp.path().join("inbox");
        fs::create_dir(&inbox).unwrap();
        fs::write(inbox.join("bracket.sldprt"), b"p1").unwrap();
        fs::write(inbox.join("frame.dwg"), b"d1").unwrap();
        fs::write(inbox.join("readme.txt"), b"ignore").unwrap();

        let mut reg = registry(&tmp);
        let folder = add_folder(&mut reg, &inbox);

        let stats = SyncEngine::new(&mut reg).sync_folder(&folder).unwrap();
        assert_eq!(stats.seen, 2);
        assert_eq!(stats.new, 2);
        assert_eq!(stats.updated, 0);
        assert_eq!(reg.db().count_documents().unwrap(), 2);

        let folder = reg.folder_by_id(folder.id).unwrap().unwrap();
        assert!(folder.last_sync.is_some());
    }

    #[test]
    fn test_sync_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        let inbox = tmp.path().join("inbox");
        fs::create_dir_all(inbox.join("archive")).unwrap();
        fs::write(inbox.join("top.sldprt"), b"p1").unwrap();
        fs::write(inbox.join("archive/deep.sldprt"), b"p2").unwrap();

        let mut reg = registry(&tmp);
        let folder = add_folder(&mut reg, &inbox);

        let stats = SyncEngine::new(&mut reg).sync_folder(&folder).unwrap();
        assert_eq!(stats.new, 1);
    }

    #[test]
    fn test_sync_missing_folder_errors() {
        let tmp = TempDir::new().unwrap();
        let mut reg = registry(&tmp);
        let folder = add_folder(&mut reg, &tmp.path().join("nope"));

        let err = SyncEngine::new(&mut reg).sync_folder(&folder).unwrap_err();
        assert!(matches!(err, SyncError::MissingFolder(_)));
    }

    #[test]
    fn test_partial_failure_is_counted_not_fatal() {
        let tmp = TempDir::new().unwrap();
        let inbox = tmp.path().join("inbox");
        fs::create_dir(&inbox).unwrap();
        for i in 0..4 {
            fs::write(inbox.join(format!("part{i}.sldprt")), format!("body {i}")).unwrap();
        }
        // A recognized entry whose bytes cannot be opened, like a file the
        // authoring tool still holds locked.
        #[cfg(unix)]
        std::os::unix::fs::symlink(inbox.join("ghost"), inbox.join("locked.sldprt"))
            .unwrap();

        let mut reg = registry(&tmp);
        let folder = add_folder(&mut reg, &inbox);
        let stats = SyncEngine::new(&mut reg).sync_folder(&folder).unwrap();

        assert_eq!(stats.new, 4);
        #[cfg(unix)]
        assert_eq!(stats.skipped, 1);
        // The unreadable file left no trace.
        assert!(reg.document_by_path(&inbox.join("locked.sldprt")).unwrap().is_none());
        assert_eq!(reg.db().count_documents().unwrap(), 4);
        // The stamp is written despite the partial failure.
        assert!(reg.folder_by_id(folder.id).unwrap().unwrap().last_sync.is_some());
    }

    #[test]
    fn test_sync_scenario_new_updated_unchanged() {
        let tmp = TempDir::new().unwrap();
        let inbox = tmp.path().join("inbox");
        fs::create_dir(&inbox).unwrap();

        let frame = inbox.join("frame.dwg");
        let housing = inbox.join("housing.step");
        fs::write(&frame, b"frame v1").unwrap();
        fs::write(&housing, b"housing v1").unwrap();

        let mut reg = registry(&tmp);
        reg.register_or_update(&frame, None).unwrap();
        let housing_doc = reg.register_or_update(&housing, None).unwrap();
        reg.change_status(housing_doc.document_id(), DocStatus::Liberado).unwrap();

        // housing changes on disk, bracket appears, frame stays put.
        fs::write(&housing, b"housing v2").unwrap();
        fs::write(inbox.join("bracket.sldprt"), b"bracket v1").unwrap();

        let folder = add_folder(&mut reg, &inbox);
        let stats = SyncEngine::new(&mut reg).sync_folder(&folder).unwrap();

        assert_eq!(stats.new, 1);
        assert_eq!(stats.updated, 1);
        assert_eq!(stats.unchanged, 1);

        let housing_doc =
            reg.document_by_id(housing_doc.document_id()).unwrap().unwrap();
        assert_eq!(housing_doc.status, DocStatus::EnDiseno);
    }

    #[test]
    fn test_sync_all_skips_missing_folders() {
        let tmp = TempDir::new().unwrap();
        let inbox = tmp.path().join("inbox");
        fs::create_dir(&inbox).unwrap();
        fs::write(inbox.join("a.sldprt"), b"a").unwrap();

        let mut reg = registry(&tmp);
        add_folder(&mut reg, &inbox);
        add_folder(&mut reg, &tmp.path().join("unplugged-drive"));

        let stats = SyncEngine::new(&mut reg).sync_all().unwrap();
        assert_eq!(stats.new, 1);
    }
}
