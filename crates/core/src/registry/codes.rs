//! Document code allocation.
//!
//! Codes look like `PZA-2026-0001`: kind prefix, allocation year, and a
//! zero-padded sequence. The sequence is global per kind; the year is part
//! of the display string only, not of the lookup key. Callers must run
//! `next_code` inside the same transaction as the document insert so that
//! allocation and insert are atomic.

use rusqlite::Connection;

use super::db;
use super::types::DocumentKind;

/// Width of the zero-padded numeric suffix.
const SUFFIX_WIDTH: usize = 4;

/// Allocate the next code for a kind.
pub fn next_code(
    conn: &Connection,
    kind: DocumentKind,
    year: i32,
) -> Result<String, rusqlite::Error> {
    let last = db::last_code_for_kind(conn, kind)?;
    let next = last.as_deref().and_then(numeric_suffix).unwrap_or(0) + 1;
    Ok(format_code(kind, year, next))
}

/// Render a code from its parts.
pub fn format_code(kind: DocumentKind, year: i32, sequence: i64) -> String {
    format!("{}-{}-{:0width$}", kind.code_prefix(), year, sequence, width = SUFFIX_WIDTH)
}

/// Extract the numeric suffix of a code, if it parses.
pub fn numeric_suffix(code: &str) -> Option<i64> {
    code.rsplit('-').next()?.parse().ok()
}
