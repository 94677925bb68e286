//! Registry data types for documents, revisions, watch folders and the audit log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Document classification derived from the source file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A single part model.
    Piece,
    /// An assembly of parts.
    Assembly,
    /// A 2D drawing sheet.
    Drawing,
    /// A bill-of-materials export (manual classification only).
    Bom,
    #[default]
    Other,
}

impl DocumentKind {
    /// Parse kind from its database string (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "piece" => Some(Self::Piece),
            "assembly" => Some(Self::Assembly),
            "drawing" => Some(Self::Drawing),
            "bom" => Some(Self::Bom),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Piece => "piece",
            Self::Assembly => "assembly",
            Self::Drawing => "drawing",
            Self::Bom => "bom",
            Self::Other => "other",
        }
    }

    /// Code prefix used by the allocator, e.g. `PZA-2026-0001`.
    pub fn code_prefix(&self) -> &'static str {
        match self {
            Self::Piece => "PZA",
            Self::Assembly => "ENS",
            Self::Drawing => "PLN",
            Self::Bom => "BOM",
            Self::Other => "DOC",
        }
    }
}

/// Authoring tool hint associated with an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CadTool {
    SolidWorks,
    AutoCad,
    #[default]
    Other,
}

impl CadTool {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "solidworks" => Some(Self::SolidWorks),
            "autocad" => Some(Self::AutoCad),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SolidWorks => "solidworks",
            Self::AutoCad => "autocad",
            Self::Other => "other",
        }
    }
}

/// Document lifecycle status.
///
/// Transitions are user-driven and unconstrained; the only automatic
/// transition is the reset to `EnDiseno` when a content change is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DocStatus {
    #[default]
    EnDiseno,
    Revision,
    Aprobado,
    Liberado,
    Obsoleto,
}

impl DocStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en_diseno" => Some(Self::EnDiseno),
            "revision" => Some(Self::Revision),
            "aprobado" => Some(Self::Aprobado),
            "liberado" => Some(Self::Liberado),
            "obsoleto" => Some(Self::Obsoleto),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EnDiseno => "en_diseno",
            Self::Revision => "revision",
            Self::Aprobado => "aprobado",
            Self::Liberado => "liberado",
            Self::Obsoleto => "obsoleto",
        }
    }
}

/// Action tag for audit log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogAction {
    /// A new document entered the registry.
    Registered,
    /// A content change was detected on an already registered path.
    ChangeDetected,
    /// A formal revision row was added.
    Revision,
    /// An explicit status transition.
    Status,
}

impl LogAction {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "REGISTERED" => Some(Self::Registered),
            "CHANGE_DETECTED" => Some(Self::ChangeDetected),
            "REVISION" => Some(Self::Revision),
            "STATUS" => Some(Self::Status),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "REGISTERED",
            Self::ChangeDetected => "CHANGE_DETECTED",
            Self::Revision => "REVISION",
            Self::Status => "STATUS",
        }
    }
}

/// A registered CAD document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: i64,
    /// Allocated code, unique across the registry (e.g. `PZA-2026-0001`).
    pub code: String,
    /// Display name, normally the source file stem.
    pub name: String,
    pub kind: DocumentKind,
    pub tool: CadTool,
    pub status: DocStatus,
    /// Original path on the authoring workstation. Unique: at most one
    /// document per source path.
    pub source_path: PathBuf,
    /// Latest snapshot filename inside the vault directory.
    pub vault_file: String,
    /// Content hash of the source file at the last register/update.
    pub content_hash: String,
    /// Opaque foreign key into the ERP project module.
    pub project_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

/// A formal, user-visible revision of a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Revision {
    pub id: i64,
    pub document_id: i64,
    /// Label sequence A, B, ... Z, A1, A2, ...
    pub label: String,
    pub change_note: Option<String>,
    /// Status of the document when the revision was taken.
    pub status: DocStatus,
    /// Vault snapshot backing this revision, if one existed.
    pub vault_file: Option<String>,
    pub content_hash: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A configured directory scanned for CAD files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchFolder {
    pub id: i64,
    pub path: PathBuf,
    /// Authoring-tool hint, informational only.
    pub tool: Option<String>,
    pub active: bool,
    pub last_sync: Option<DateTime<Utc>>,
}

/// Append-only audit trail entry. Never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub document_id: i64,
    pub action: LogAction,
    pub detail: String,
    pub created_at: DateTime<Utc>,
}

/// Compact document view for listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub kind: DocumentKind,
    pub status: DocStatus,
    pub source_path: PathBuf,
    pub modified_at: DateTime<Utc>,
}

/// Query filter for listing documents.
#[derive(Debug, Clone, Default)]
pub struct DocumentQuery {
    pub kind: Option<DocumentKind>,
    pub status: Option<DocStatus>,
    pub project_id: Option<i64>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DocumentKind::Piece, "piece", "PZA")]
    #[case(DocumentKind::Assembly, "assembly", "ENS")]
    #[case(DocumentKind::Drawing, "drawing", "PLN")]
    #[case(DocumentKind::Bom, "bom", "BOM")]
    #[case(DocumentKind::Other, "other", "DOC")]
    fn kind_round_trips(
        #[case] kind: DocumentKind,
        #[case] s: &str,
        #[case] prefix: &str,
    ) {
        assert_eq!(kind.as_str(), s);
        assert_eq!(DocumentKind::parse(s), Some(kind));
        assert_eq!(kind.code_prefix(), prefix);
    }

    #[test]
    fn status_round_trips() {
        for s in ["en_diseno", "revision", "aprobado", "liberado", "obsoleto"] {
            let parsed = DocStatus::parse(s).unwrap();
            assert_eq!(parsed.as_str(), s);
        }
        assert_eq!(DocStatus::parse("released"), None);
    }

    #[test]
    fn log_action_round_trips() {
        for a in [
            LogAction::Registered,
            LogAction::ChangeDetected,
            LogAction::Revision,
            LogAction::Status,
        ] {
            assert_eq!(LogAction::parse(a.as_str()), Some(a));
        }
    }
}
