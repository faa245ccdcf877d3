//! Excel exporter implementation - output table → single-column .xlsx

use crate::error::{RosterError, RosterResult};
use rust_xlsxwriter::Workbook;
use std::path::Path;

/// Writes the formatted output table to a new workbook: one worksheet,
/// formatted strings in column A starting at the first row, no header.
pub struct FormattedWriter {
    rows: Vec<String>,
}

impl FormattedWriter {
    /// Create a writer over the formatted rows
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Save the output workbook. An empty table still produces a valid
    /// workbook with one blank worksheet.
    pub fn write(&self, output_path: &Path) -> RosterResult<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        for (row_idx, value) in self.rows.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, 0, value)
                .map_err(|e| RosterError::Export(format!("Failed to write row: {}", e)))?;
        }

        workbook
            .save(output_path)
            .map_err(|e| RosterError::Export(format!("Failed to save Excel file: {}", e)))?;

        Ok(())
    }
}
