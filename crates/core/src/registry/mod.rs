//! Engineering document registry backed by SQLite.
//!
//! The registry is the source of truth for what the vault holds: one row
//! per live document, its full revision history, the watch folder list,
//! and an append-only audit log. All writes funnel through
//! [`DocumentRegistry`], which pairs the database with the snapshot vault
//! so a registration either lands in both or in neither.

pub mod codes;
pub mod db;
pub mod labels;
pub mod schema;
pub mod service;
pub mod types;

pub use db::{DbError, RegistryDb};
pub use schema::{SCHEMA_VERSION, SchemaError};
pub use service::{DocumentRegistry, RegisterOutcome, RegistryError};
pub use types::{
    CadTool, DocStatus, Document, DocumentKind, DocumentQuery, DocumentSummary,
    LogAction, LogEntry, Revision, WatchFolder,
};
