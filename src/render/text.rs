//! Plain text rendering for extracted tables.

use crate::error::Result;
use crate::model::TableModel;

/// Convert a table to plain text: one row per line, cells separated by tabs,
/// head rows first and foot rows last.
pub fn to_text(table: &TableModel) -> Result<String> {
    Ok(table.plain_text())
}
