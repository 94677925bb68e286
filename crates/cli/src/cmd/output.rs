//! Shared output formatting for query commands.

use cadvault_core::registry::{Document, DocumentSummary};
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

#[derive(Tabled)]
pub struct DocumentRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Modified")]
    modified: String,
}

impl From<&Document> for DocumentRow {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id,
            code: doc.code.clone(),
            name: doc.name.clone(),
            kind: doc.kind.as_str().to_string(),
            status: doc.status.as_str().to_string(),
            modified: doc.modified_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

impl From<&DocumentSummary> for DocumentRow {
    fn from(doc: &DocumentSummary) -> Self {
        Self {
            id: doc.id,
            code: doc.code.clone(),
            name: doc.name.clone(),
            kind: doc.kind.as_str().to_string(),
            status: doc.status.as_str().to_string(),
            modified: doc.modified_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

pub fn print_document_table<'a, T>(docs: impl IntoIterator<Item = &'a T>, empty: &str)
where
    T: 'a,
    DocumentRow: From<&'a T>,
{
    let rows: Vec<DocumentRow> = docs.into_iter().map(DocumentRow::from).collect();
    if rows.is_empty() {
        println!("{empty}");
        return;
    }
    let count = rows.len();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{table}");
    println!("-- {count} documents --");
}

pub fn print_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
