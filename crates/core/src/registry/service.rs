//! The document registry service.
//!
//! `DocumentRegistry` is the single mutation surface shared by the three
//! triggers: interactive registration, batch folder sync, and the watch
//! daemon. All of them converge on [`register_or_update`], so there is one
//! code path deciding whether a source file is new, unchanged, or changed.
//!
//! [`register_or_update`]: DocumentRegistry::register_or_update

use std::path::Path;

use chrono::{Datelike, Utc};
use rusqlite::TransactionBehavior;
use thiserror::Error;

use crate::extensions;
use crate::vault::{VaultError, VaultStore, hash_file};

use super::codes;
use super::db::{self, DbError, NewDocument, NewRevision, RegistryDb};
use super::labels;
use super::types::{
    DocStatus, Document, DocumentQuery, DocumentSummary, LogAction, LogEntry,
    Revision, WatchFolder,
};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("unsupported file extension: {extension}")]
    Unsupported { extension: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Vault(#[from] VaultError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("document not found: id {0}")]
    DocumentNotFound(i64),

    #[error("watch folder not found: id {0}")]
    FolderNotFound(i64),
}

impl From<rusqlite::Error> for RegistryError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Db(DbError::Database(e))
    }
}

/// Result of the register-or-update primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The path was unknown; a document and its initial revision were created.
    Registered { document_id: i64, code: String },
    /// The path was known and its content changed; hash, vault pointer and
    /// status were updated.
    Updated { document_id: i64, code: String },
    /// The path is already registered with identical content. For the
    /// interactive path this is the non-fatal "already registered" signal.
    Unchanged { document_id: i64, code: String },
}

impl RegisterOutcome {
    pub fn code(&self) -> &str {
        match self {
            Self::Registered { code, .. }
            | Self::Updated { code, .. }
            | Self::Unchanged { code, .. } => code,
        }
    }

    pub fn document_id(&self) -> i64 {
        match self {
            Self::Registered { document_id, .. }
            | Self::Updated { document_id, .. }
            | Self::Unchanged { document_id, .. } => *document_id,
        }
    }
}

/// The authoritative store of documents, revisions and audit history.
pub struct DocumentRegistry {
    db: RegistryDb,
    vault: VaultStore,
}

impl DocumentRegistry {
    pub fn new(db: RegistryDb, vault: VaultStore) -> Self {
        Self { db, vault }
    }

    /// Open the registry database and vault directory in one step.
    pub fn open(db_path: &Path, vault_dir: &Path) -> Result<Self, RegistryError> {
        let db = RegistryDb::open(db_path)?;
        let vault = VaultStore::open(vault_dir)?;
        Ok(Self::new(db, vault))
    }

    /// Read access to the underlying database.
    pub fn db(&self) -> &RegistryDb {
        &self.db
    }

    /// The vault backing this registry.
    pub fn vault(&self) -> &VaultStore {
        &self.vault
    }

    /// Register a path, or fold a content change into its existing document.
    ///
    /// The decision and all row writes happen inside one IMMEDIATE
    /// transaction, so code allocation can never race with another insert
    /// and a failed vault copy leaves no partial rows behind.
    pub fn register_or_update(
        &mut self,
        path: &Path,
        project_id: Option<i64>,
    ) -> Result<RegisterOutcome, RegistryError> {
        let (kind, tool) = extensions::recognize(path).ok_or_else(|| {
            RegistryError::Unsupported {
                extension: path
                    .extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            }
        })?;

        let hash = hash_file(path)
            .map_err(|e| RegistryError::Io { path: path.display().to_string(), source: e })?;

        let now = Utc::now();
        let vault = &self.vault;
        let tx = self
            .db
            .connection_mut()
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let outcome = match db::find_document_by_path(&tx, path)? {
            Some(doc) if doc.content_hash == hash => {
                tracing::debug!(code = %doc.code, "unchanged: {}", path.display());
                RegisterOutcome::Unchanged { document_id: doc.id, code: doc.code }
            }
            Some(doc) => {
                let vault_file = vault.store(path, &doc.code, true)?;
                db::update_document_content(&tx, doc.id, &hash, &vault_file, now)?;
                db::insert_log(
                    &tx,
                    doc.id,
                    LogAction::ChangeDetected,
                    &format!("content changed, snapshot {vault_file}"),
                    now,
                )?;
                tracing::info!(code = %doc.code, "updated: {}", path.display());
                RegisterOutcome::Updated { document_id: doc.id, code: doc.code }
            }
            None => {
                let code = codes::next_code(&tx, kind, now.year())?;
                let vault_file = vault.store(path, &code, false)?;
                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| code.clone());

                let document_id = db::insert_document(
                    &tx,
                    &NewDocument {
                        code: &code,
                        name: &name,
                        kind,
                        tool,
                        source_path: path,
                        vault_file: &vault_file,
                        content_hash: &hash,
                        project_id,
                        created_at: now,
                    },
                )?;
                db::insert_revision(
                    &tx,
                    &NewRevision {
                        document_id,
                        label: "A",
                        change_note: Some("initial import"),
                        status: DocStatus::EnDiseno,
                        vault_file: Some(&vault_file),
                        content_hash: Some(&hash),
                        created_at: now,
                    },
                )?;
                db::insert_log(
                    &tx,
                    document_id,
                    LogAction::Registered,
                    &format!("registered as {code} from {}", path.display()),
                    now,
                )?;
                tracing::info!(code = %code, "registered: {}", path.display());
                RegisterOutcome::Registered { document_id, code }
            }
        };

        tx.commit()?;
        Ok(outcome)
    }

    /// Explicit, user-driven status transition. Unconstrained ordering.
    pub fn change_status(
        &mut self,
        document_id: i64,
        status: DocStatus,
    ) -> Result<LogEntry, RegistryError> {
        let now = Utc::now();
        let tx = self
            .db
            .connection_mut()
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let old = tx
            .query_row(
                "SELECT status FROM documents WHERE id = ?1",
                [document_id],
                |row| row.get::<_, String>(0),
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => {
                    RegistryError::DocumentNotFound(document_id)
                }
                other => other.into(),
            })?;

        db::set_document_status(&tx, document_id, status, now)?;
        let log_id = db::insert_log(
            &tx,
            document_id,
            LogAction::Status,
            &format!("{} -> {}", old, status.as_str()),
            now,
        )?;
        let entry = db::log_entry_by_id(&tx, log_id)?
            .ok_or(RegistryError::DocumentNotFound(document_id))?;

        tx.commit()?;
        Ok(entry)
    }

    /// Append a formal revision, snapshotting the document's current state.
    ///
    /// This is the only path that creates Revision rows after registration;
    /// the silent content-change path deliberately does not.
    pub fn add_revision(
        &mut self,
        document_id: i64,
        description: Option<&str>,
    ) -> Result<String, RegistryError> {
        let now = Utc::now();
        let tx = self
            .db
            .connection_mut()
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let doc = db::find_document_by_id(&tx, document_id)?
            .ok_or(RegistryError::DocumentNotFound(document_id))?;

        let last = db::last_revision_label(&tx, document_id)?;
        let label = labels::next_label(last.as_deref());

        db::insert_revision(
            &tx,
            &NewRevision {
                document_id,
                label: &label,
                change_note: description,
                status: doc.status,
                vault_file: Some(&doc.vault_file),
                content_hash: Some(&doc.content_hash),
                created_at: now,
            },
        )?;
        db::touch_document(&tx, document_id, now)?;
        db::insert_log(
            &tx,
            document_id,
            LogAction::Revision,
            &format!("revision {label}"),
            now,
        )?;

        tx.commit()?;
        Ok(label)
    }

    // Read-side and configuration pass-throughs.

    pub fn document_by_id(&self, id: i64) -> Result<Option<Document>, RegistryError> {
        Ok(self.db.document_by_id(id)?)
    }

    pub fn document_by_path(&self, path: &Path) -> Result<Option<Document>, RegistryError> {
        Ok(self.db.document_by_path(path)?)
    }

    pub fn query_documents(
        &self,
        query: &DocumentQuery,
    ) -> Result<Vec<Document>, RegistryError> {
        Ok(self.db.query_documents(query)?)
    }

    pub fn list_recent(&self, limit: u32) -> Result<Vec<DocumentSummary>, RegistryError> {
        Ok(self.db.recent_documents(limit)?)
    }

    pub fn revisions_for(&self, document_id: i64) -> Result<Vec<Revision>, RegistryError> {
        Ok(self.db.revisions_for(document_id)?)
    }

    pub fn log_for(
        &self,
        document_id: i64,
        limit: u32,
    ) -> Result<Vec<LogEntry>, RegistryError> {
        Ok(self.db.log_for(document_id, limit)?)
    }

    pub fn add_watch_folder(
        &mut self,
        path: &Path,
        tool: Option<&str>,
    ) -> Result<WatchFolder, RegistryError> {
        Ok(self.db.add_watch_folder(path, tool)?)
    }

    pub fn folder_by_id(&self, id: i64) -> Result<Option<WatchFolder>, RegistryError> {
        Ok(self.db.folder_by_id(id)?)
    }

    pub fn active_watch_folders(&self) -> Result<Vec<WatchFolder>, RegistryError> {
        Ok(self.db.active_watch_folders()?)
    }

    pub fn touch_folder_sync(&mut self, id: i64) -> Result<(), RegistryError> {
        Ok(self.db.touch_folder_sync(id, Utc::now())?)
    }
}
