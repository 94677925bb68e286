//! Database connection and row-level operations.
//!
//! `RegistryDb` owns the connection and serves the read paths. The write
//! helpers at the bottom operate on a plain `&Connection` so the service
//! layer can run them inside a single transaction together with code
//! allocation.

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};
use thiserror::Error;

use super::schema::{SchemaError, init_schema};
use super::types::{
    CadTool, DocStatus, Document, DocumentKind, DocumentQuery, DocumentSummary,
    LogAction, LogEntry, Revision, WatchFolder,
};

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Watch folder not found: id {0}")]
    FolderNotFound(i64),

    #[error("Watch folder already configured: {0}")]
    FolderExists(String),
}

/// Registry database handle.
pub struct RegistryDb {
    conn: Connection,
}

impl RegistryDb {
    /// Open or create the registry database at the given path.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA foreign_keys = ON;
             PRAGMA busy_timeout = 5000;",
        )?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        init_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Get the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Mutable connection access (for transactions).
    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    // ─────────────────────────────────────────────────────────────────────
    // Documents
    // ─────────────────────────────────────────────────────────────────────

    /// Look up a document by its source path.
    pub fn document_by_path(&self, path: &Path) -> Result<Option<Document>, DbError> {
        find_document_by_path(&self.conn, path).map_err(Into::into)
    }

    /// Look up a document by id.
    pub fn document_by_id(&self, id: i64) -> Result<Option<Document>, DbError> {
        self.conn
            .query_row(
                &format!("{DOCUMENT_COLUMNS} WHERE id = ?1"),
                [id],
                row_to_document,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Look up a document by its allocated code.
    pub fn document_by_code(&self, code: &str) -> Result<Option<Document>, DbError> {
        self.conn
            .query_row(
                &format!("{DOCUMENT_COLUMNS} WHERE code = ?1"),
                [code],
                row_to_document,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Query documents with filters, newest first.
    pub fn query_documents(
        &self,
        query: &DocumentQuery,
    ) -> Result<Vec<Document>, DbError> {
        let mut sql = format!("{DOCUMENT_COLUMNS} WHERE 1=1");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(kind) = query.kind {
            sql.push_str(" AND kind = ?");
            params_vec.push(Box::new(kind.as_str().to_string()));
        }

        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            params_vec.push(Box::new(status.as_str().to_string()));
        }

        if let Some(project_id) = query.project_id {
            sql.push_str(" AND project_id = ?");
            params_vec.push(Box::new(project_id));
        }

        sql.push_str(" ORDER BY modified_at DESC");

        if let Some(limit) = query.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        let params_refs: Vec<&dyn rusqlite::ToSql> =
            params_vec.iter().map(|p| p.as_ref()).collect();

        let mut stmt = self.conn.prepare(&sql)?;
        let docs = stmt
            .query_map(params_refs.as_slice(), row_to_document)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(docs)
    }

    /// Most recently modified documents, as compact summaries.
    pub fn recent_documents(&self, limit: u32) -> Result<Vec<DocumentSummary>, DbError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, code, name, kind, status, source_path, modified_at
             FROM documents ORDER BY modified_at DESC LIMIT ?1",
        )?;

        let rows = stmt
            .query_map([limit], |row| {
                let kind: String = row.get(3)?;
                let status: String = row.get(4)?;
                let path: String = row.get(5)?;
                let modified: String = row.get(6)?;
                Ok(DocumentSummary {
                    id: row.get(0)?,
                    code: row.get(1)?,
                    name: row.get(2)?,
                    kind: DocumentKind::parse(&kind).unwrap_or_default(),
                    status: DocStatus::parse(&status).unwrap_or_default(),
                    source_path: path.into(),
                    modified_at: parse_ts(&modified),
                })
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(rows)
    }

    /// Total document count.
    pub fn count_documents(&self) -> Result<i64, DbError> {
        let count: i64 =
            self.conn.query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Document counts grouped by status.
    pub fn status_counts(&self) -> Result<Vec<(DocStatus, i64)>, DbError> {
        let mut stmt = self
            .conn
            .prepare("SELECT status, COUNT(*) FROM documents GROUP BY status")?;

        let counts = stmt
            .query_map([], |row| {
                let status: String = row.get(0)?;
                let count: i64 = row.get(1)?;
                Ok((DocStatus::parse(&status).unwrap_or_default(), count))
            })?
            .filter_map(|r| r.ok())
            .collect();

        Ok(counts)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Revisions and audit log
    // ─────────────────────────────────────────────────────────────────────

    /// Revisions of a document, newest first.
    pub fn revisions_for(&self, document_id: i64) -> Result<Vec<Revision>, DbError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, document_id, label, change_note, status, vault_file,
                    content_hash, created_at
             FROM revisions WHERE document_id = ?1 ORDER BY id DESC",
        )?;

        let revisions = stmt
            .query_map([document_id], row_to_revision)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(revisions)
    }

    /// Audit log of a document, newest first.
    pub fn log_for(&self, document_id: i64, limit: u32) -> Result<Vec<LogEntry>, DbError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, document_id, action, detail, created_at
             FROM audit_log WHERE document_id = ?1 ORDER BY id DESC LIMIT ?2",
        )?;

        let entries = stmt
            .query_map(params![document_id, limit], row_to_log_entry)?
            .filter_map(|r| r.ok())
            .collect();

        Ok(entries)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Watch folders
    // ─────────────────────────────────────────────────────────────────────

    /// Add a watch folder. A duplicate path is a configuration conflict.
    pub fn add_watch_folder(
        &self,
        path: &Path,
        tool: Option<&str>,
    ) -> Result<WatchFolder, DbError> {
        let result = self.conn.execute(
            "INSERT INTO watch_folders (path, tool, active) VALUES (?1, ?2, 1)",
            params![path.to_string_lossy(), tool],
        );

        match result {
            Ok(_) => {}
            Err(e) if is_unique_violation(&e) => {
                return Err(DbError::FolderExists(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        let id = self.conn.last_insert_rowid();
        self.folder_by_id(id)?.ok_or(DbError::FolderNotFound(id))
    }

    /// All configured watch folders.
    pub fn list_watch_folders(&self) -> Result<Vec<WatchFolder>, DbError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, path, tool, active, last_sync FROM watch_folders ORDER BY id",
        )?;

        let folders =
            stmt.query_map([], row_to_folder)?.filter_map(|r| r.ok()).collect();

        Ok(folders)
    }

    /// Only the folders flagged active.
    pub fn active_watch_folders(&self) -> Result<Vec<WatchFolder>, DbError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, path, tool, active, last_sync FROM watch_folders
             WHERE active = 1 ORDER BY id",
        )?;

        let folders =
            stmt.query_map([], row_to_folder)?.filter_map(|r| r.ok()).collect();

        Ok(folders)
    }

    pub fn folder_by_id(&self, id: i64) -> Result<Option<WatchFolder>, DbError> {
        self.conn
            .query_row(
                "SELECT id, path, tool, active, last_sync FROM watch_folders WHERE id = ?1",
                [id],
                row_to_folder,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Flip the active flag of a folder.
    pub fn set_folder_active(&self, id: i64, active: bool) -> Result<(), DbError> {
        let rows = self.conn.execute(
            "UPDATE watch_folders SET active = ?1 WHERE id = ?2",
            params![active as i64, id],
        )?;
        if rows == 0 {
            return Err(DbError::FolderNotFound(id));
        }
        Ok(())
    }

    /// Remove a folder from the configuration. Documents are untouched.
    pub fn remove_watch_folder(&self, id: i64) -> Result<(), DbError> {
        let rows =
            self.conn.execute("DELETE FROM watch_folders WHERE id = ?1", [id])?;
        if rows == 0 {
            return Err(DbError::FolderNotFound(id));
        }
        Ok(())
    }

    /// Stamp a folder's last-sync time.
    pub fn touch_folder_sync(&self, id: i64, when: DateTime<Utc>) -> Result<(), DbError> {
        let rows = self.conn.execute(
            "UPDATE watch_folders SET last_sync = ?1 WHERE id = ?2",
            params![when.to_rfc3339(), id],
        )?;
        if rows == 0 {
            return Err(DbError::FolderNotFound(id));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Connection-level helpers, usable inside transactions
// ─────────────────────────────────────────────────────────────────────────

const DOCUMENT_COLUMNS: &str = "SELECT id, code, name, kind, tool, status, source_path,
     vault_file, content_hash, project_id, created_at, modified_at FROM documents";

/// Insert parameters for a new document row.
pub(crate) struct NewDocument<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub kind: DocumentKind,
    pub tool: CadTool,
    pub source_path: &'a Path,
    pub vault_file: &'a str,
    pub content_hash: &'a str,
    pub project_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

pub(crate) fn find_document_by_path(
    conn: &Connection,
    path: &Path,
) -> Result<Option<Document>, rusqlite::Error> {
    conn.query_row(
        &format!("{DOCUMENT_COLUMNS} WHERE source_path = ?1"),
        [path.to_string_lossy()],
        row_to_document,
    )
    .optional()
}

pub(crate) fn find_document_by_id(
    conn: &Connection,
    id: i64,
) -> Result<Option<Document>, rusqlite::Error> {
    conn.query_row(
        &format!("{DOCUMENT_COLUMNS} WHERE id = ?1"),
        [id],
        row_to_document,
    )
    .optional()
}

/// Latest code allocated for a kind, by insertion order.
pub(crate) fn last_code_for_kind(
    conn: &Connection,
    kind: DocumentKind,
) -> Result<Option<String>, rusqlite::Error> {
    conn.query_row(
        "SELECT code FROM documents WHERE kind = ?1 ORDER BY id DESC LIMIT 1",
        [kind.as_str()],
        |row| row.get(0),
    )
    .optional()
}

pub(crate) fn insert_document(
    conn: &Connection,
    doc: &NewDocument<'_>,
) -> Result<i64, rusqlite::Error> {
    conn.execute(
        "INSERT INTO documents
            (code, name, kind, tool, status, source_path, vault_file,
             content_hash, project_id, created_at, modified_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10)",
        params![
            doc.code,
            doc.name,
            doc.kind.as_str(),
            doc.tool.as_str(),
            DocStatus::EnDiseno.as_str(),
            doc.source_path.to_string_lossy(),
            doc.vault_file,
            doc.content_hash,
            doc.project_id,
            doc.created_at.to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Apply a detected content change: new hash, new vault pointer, status
/// reset to en_diseno.
pub(crate) fn update_document_content(
    conn: &Connection,
    id: i64,
    content_hash: &str,
    vault_file: &str,
    when: DateTime<Utc>,
) -> Result<(), rusqlite::Error> {
    conn.execute(
        "UPDATE documents
         SET content_hash = ?1, vault_file = ?2, modified_at = ?3, status = ?4
         WHERE id = ?5",
        params![
            content_hash,
            vault_file,
            when.to_rfc3339(),
            DocStatus::EnDiseno.as_str(),
            id
        ],
    )?;
    Ok(())
}

pub(crate) fn set_document_status(
    conn: &Connection,
    id: i64,
    status: DocStatus,
    when: DateTime<Utc>,
) -> Result<usize, rusqlite::Error> {
    conn.execute(
        "UPDATE documents SET status = ?1, modified_at = ?2 WHERE id = ?3",
        params![status.as_str(), when.to_rfc3339(), id],
    )
}

pub(crate) fn touch_document(
    conn: &Connection,
    id: i64,
    when: DateTime<Utc>,
) -> Result<usize, rusqlite::Error> {
    conn.execute(
        "UPDATE documents SET modified_at = ?1 WHERE id = ?2",
        params![when.to_rfc3339(), id],
    )
}

/// Insert parameters for a revision row.
pub(crate) struct NewRevision<'a> {
    pub document_id: i64,
    pub label: &'a str,
    pub change_note: Option<&'a str>,
    pub status: DocStatus,
    pub vault_file: Option<&'a str>,
    pub content_hash: Option<&'a str>,
    pub created_at: DateTime<Utc>,
}

pub(crate) fn insert_revision(
    conn: &Connection,
    rev: &NewRevision<'_>,
) -> Result<i64, rusqlite::Error> {
    conn.execute(
        "INSERT INTO revisions
            (document_id, label, change_note, status, vault_file, content_hash, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            rev.document_id,
            rev.label,
            rev.change_note,
            rev.status.as_str(),
            rev.vault_file,
            rev.content_hash,
            rev.created_at.to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Latest revision label of a document, by insertion order.
pub(crate) fn last_revision_label(
    conn: &Connection,
    document_id: i64,
) -> Result<Option<String>, rusqlite::Error> {
    conn.query_row(
        "SELECT label FROM revisions WHERE document_id = ?1 ORDER BY id DESC LIMIT 1",
        [document_id],
        |row| row.get(0),
    )
    .optional()
}

pub(crate) fn insert_log(
    conn: &Connection,
    document_id: i64,
    action: LogAction,
    detail: &str,
    when: DateTime<Utc>,
) -> Result<i64, rusqlite::Error> {
    conn.execute(
        "INSERT INTO audit_log (document_id, action, detail, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![document_id, action.as_str(), detail, when.to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub(crate) fn log_entry_by_id(
    conn: &Connection,
    id: i64,
) -> Result<Option<LogEntry>, rusqlite::Error> {
    conn.query_row(
        "SELECT id, document_id, action, detail, created_at FROM audit_log WHERE id = ?1",
        [id],
        row_to_log_entry,
    )
    .optional()
}

// ─────────────────────────────────────────────────────────────────────────
// Row mappers
// ─────────────────────────────────────────────────────────────────────────

fn row_to_document(row: &rusqlite::Row) -> Result<Document, rusqlite::Error> {
    let kind: String = row.get(3)?;
    let tool: String = row.get(4)?;
    let status: String = row.get(5)?;
    let path: String = row.get(6)?;
    let created: String = row.get(10)?;
    let modified: String = row.get(11)?;

    Ok(Document {
        id: row.get(0)?,
        code: row.get(1)?,
        name: row.get(2)?,
        kind: DocumentKind::parse(&kind).unwrap_or_default(),
        tool: CadTool::parse(&tool).unwrap_or_default(),
        status: DocStatus::parse(&status).unwrap_or_default(),
        source_path: path.into(),
        vault_file: row.get(7)?,
        content_hash: row.get(8)?,
        project_id: row.get(9)?,
        created_at: parse_ts(&created),
        modified_at: parse_ts(&modified),
    })
}

fn row_to_revision(row: &rusqlite::Row) -> Result<Revision, rusqlite::Error> {
    let status: String = row.get(4)?;
    let created: String = row.get(7)?;

    Ok(Revision {
        id: row.get(0)?,
        document_id: row.get(1)?,
        label: row.get(2)?,
        change_note: row.get(3)?,
        status: DocStatus::parse(&status).unwrap_or_default(),
        vault_file: row.get(5)?,
        content_hash: row.get(6)?,
        created_at: parse_ts(&created),
    })
}

fn row_to_log_entry(row: &rusqlite::Row) -> Result<LogEntry, rusqlite::Error> {
    let action: String = row.get(2)?;
    let created: String = row.get(4)?;

    Ok(LogEntry {
        id: row.get(0)?,
        document_id: row.get(1)?,
        action: LogAction::parse(&action).unwrap_or(LogAction::Registered),
        detail: row.get(3)?,
        created_at: parse_ts(&created),
    })
}

fn row_to_folder(row: &rusqlite::Row) -> Result<WatchFolder, rusqlite::Error> {
    let path: String = row.get(1)?;
    let active: i64 = row.get(3)?;
    let last_sync: Option<String> = row.get(4)?;

    Ok(WatchFolder {
        id: row.get(0)?,
        path: path.into(),
        tool: row.get(2)?,
        active: active != 0,
        last_sync: last_sync.as_deref().map(parse_ts),
    })
}

fn parse_ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now())
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample_doc<'a>(code: &'a str, path: &'a Path) -> NewDocument<'a> {
        NewDocument {
            code,
            name: "bracket",
            kind: DocumentKind::Piece,
            tool: CadTool::SolidWorks,
            source_path: path,
            vault_file: "PZA-2026-0001_20260830_120000.sldprt",
            content_hash: "abc123",
            project_id: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_insert_and_find_document() {
        let db = RegistryDb::open_in_memory().unwrap();
        let path = PathBuf::from("/cad/bracket.sldprt");

        let id = insert_document(db.connection(), &sample_doc("PZA-2026-0001", &path))
            .unwrap();
        assert!(id > 0);

        let doc = db.document_by_path(&path).unwrap().expect("should exist");
        assert_eq!(doc.code, "PZA-2026-0001");
        assert_eq!(doc.kind, DocumentKind::Piece);
        assert_eq!(doc.status, DocStatus::EnDiseno);

        assert!(db.document_by_path(Path::new("/cad/other.sldprt")).unwrap().is_none());
    }

    #[test]
    fn test_source_path_unique() {
        let db = RegistryDb::open_in_memory().unwrap();
        let path = PathBuf::from("/cad/bracket.sldprt");

        insert_document(db.connection(), &sample_doc("PZA-2026-0001", &path)).unwrap();
        let dup = insert_document(db.connection(), &sample_doc("PZA-2026-0002", &path));
        assert!(dup.is_err());
    }

    #[test]
    fn test_update_document_content_resets_status() {
        let db = RegistryDb::open_in_memory().unwrap();
        let path = PathBuf::from("/cad/bracket.sldprt");
        let id = insert_document(db.connection(), &sample_doc("PZA-2026-0001", &path))
            .unwrap();

        set_document_status(db.connection(), id, DocStatus::Liberado, Utc::now())
            .unwrap();
        let doc = db.document_by_id(id).unwrap().unwrap();
        assert_eq!(doc.status, DocStatus::Liberado);

        update_document_content(
            db.connection(),
            id,
            "def456",
            "PZA-2026-0001_rev_20260830_130000.sldprt",
            Utc::now(),
        )
        .unwrap();

        let doc = db.document_by_id(id).unwrap().unwrap();
        assert_eq!(doc.status, DocStatus::EnDiseno);
        assert_eq!(doc.content_hash, "def456");
    }

    #[test]
    fn test_query_documents_filters() {
        let db = RegistryDb::open_in_memory().unwrap();
        let p1 = PathBuf::from("/cad/a.sldprt");
        let p2 = PathBuf::from("/cad/b.dwg");

        insert_document(db.connection(), &sample_doc("PZA-2026-0001", &p1)).unwrap();
        let mut drawing = sample_doc("PLN-2026-0001", &p2);
        drawing.kind = DocumentKind::Drawing;
        insert_document(db.connection(), &drawing).unwrap();

        let query =
            DocumentQuery { kind: Some(DocumentKind::Drawing), ..Default::default() };
        let docs = db.query_documents(&query).unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0].code, "PLN-2026-0001");

        assert_eq!(db.count_documents().unwrap(), 2);
        assert_eq!(db.status_counts().unwrap(), vec![(DocStatus::EnDiseno, 2)]);
    }

    #[test]
    fn test_revisions_and_log() {
        let db = RegistryDb::open_in_memory().unwrap();
        let path = PathBuf::from("/cad/a.sldprt");
        let id = insert_document(db.connection(), &sample_doc("PZA-2026-0001", &path))
            .unwrap();

        insert_revision(
            db.connection(),
            &NewRevision {
                document_id: id,
                label: "A",
                change_note: Some("initial import"),
                status: DocStatus::EnDiseno,
                vault_file: Some("PZA-2026-0001_20260830_120000.sldprt"),
                content_hash: Some("abc123"),
                created_at: Utc::now(),
            },
        )
        .unwrap();
        insert_log(db.connection(), id, LogAction::Registered, "code PZA-2026-0001", Utc::now())
            .unwrap();

        assert_eq!(last_revision_label(db.connection(), id).unwrap().as_deref(), Some("A"));
        assert_eq!(db.revisions_for(id).unwrap().len(), 1);

        let log = db.log_for(id, 20).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].action, LogAction::Registered);
    }

    #[test]
    fn test_watch_folder_conflict() {
        let db = RegistryDb::open_in_memory().unwrap();

        let folder = db.add_watch_folder(Path::new("/cad/inbox"), Some("solidworks")).unwrap();
        assert!(folder.active);
        assert!(folder.last_sync.is_none());

        let err = db.add_watch_folder(Path::new("/cad/inbox"), None).unwrap_err();
        assert!(matches!(err, DbError::FolderExists(_)));
    }

    #[test]
    fn test_watch_folder_toggle_and_sync_stamp() {
        let db = RegistryDb::open_in_memory().unwrap();
        let folder = db.add_watch_folder(Path::new("/cad/inbox"), None).unwrap();

        db.set_folder_active(folder.id, false).unwrap();
        assert!(db.active_watch_folders().unwrap().is_empty());
        assert_eq!(db.list_watch_folders().unwrap().len(), 1);

        db.set_folder_active(folder.id, true).unwrap();
        db.touch_folder_sync(folder.id, Utc::now()).unwrap();
        let folder = db.folder_by_id(folder.id).unwrap().unwrap();
        assert!(folder.last_sync.is_some());

        assert!(matches!(
            db.set_folder_active(999, true).unwrap_err(),
            DbError::FolderNotFound(999)
        ));
    }
}
