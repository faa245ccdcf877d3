//! Sheet Reformatter - turns roster rows into quoted comma-joined strings.
//!
//! The single data-reshaping step of the tool: select the three required
//! columns from a sheet and emit one `"<name>", "<reg no>", "<dept>"`
//! string per data row, in source order. Pure transform, no I/O.

use crate::error::{RosterError, RosterResult};
use crate::types::{CellValue, Sheet, REQUIRED_COLUMNS};
use std::collections::HashMap;

/// Mapping from trimmed column name to column index, built once per sheet.
pub struct ColumnSchema {
    indices: HashMap<String, usize>,
}

impl ColumnSchema {
    /// Build the schema from a sheet's header row. Surrounding whitespace in
    /// header names is stripped before matching; a duplicated trimmed name
    /// keeps the first occurrence.
    pub fn from_headers(columns: &[String]) -> Self {
        let mut indices = HashMap::new();
        for (idx, name) in columns.iter().enumerate() {
            indices.entry(name.trim().to_string()).or_insert(idx);
        }
        Self { indices }
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.indices.get(column).copied()
    }

    /// Resolve the required roster columns to their indices, in fixed order.
    /// Reports every absent column at once rather than the first.
    pub fn required_indices(&self) -> RosterResult<[usize; 3]> {
        let mut missing = Vec::new();
        let mut found = [0usize; 3];

        for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
            match self.index_of(name) {
                Some(idx) => found[slot] = idx,
                None => missing.push((*name).to_string()),
            }
        }

        if missing.is_empty() {
            Ok(found)
        } else {
            Err(RosterError::MissingColumns(missing))
        }
    }
}

/// Reformat a sheet into its output table: one formatted string per data
/// row, same order, no header. A sheet with zero data rows yields an empty
/// table. Fails with `MissingColumns` if any required column is absent
/// after header trimming.
pub fn reformat(sheet: &Sheet) -> RosterResult<Vec<String>> {
    let schema = ColumnSchema::from_headers(&sheet.columns);
    let indices = schema.required_indices()?;

    let mut output = Vec::with_capacity(sheet.rows.len());
    for row in &sheet.rows {
        output.push(format_row(row, &indices));
    }
    Ok(output)
}

/// Build one formatted row string. Values are inserted verbatim between
/// double quotes; embedded quotes are not escaped. A row shorter than the
/// header reads its missing cells as empty.
fn format_row(row: &[CellValue], indices: &[usize; 3]) -> String {
    let cell_text = |idx: usize| row.get(idx).map(CellValue::as_text).unwrap_or_default();

    format!(
        "\"{}\", \"{}\", \"{}\"",
        cell_text(indices[0]),
        cell_text(indices[1]),
        cell_text(indices[2])
    )
}
