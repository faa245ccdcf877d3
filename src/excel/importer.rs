//! Excel importer implementation - .xlsx workbook → in-memory Sheet

use crate::error::{RosterError, RosterResult};
use crate::types::{CellValue, Sheet};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Reader for roster workbooks. Only `.xlsx` input is accepted; the
/// extension is checked before calamine touches the file.
pub struct SheetReader {
    path: PathBuf,
}

impl SheetReader {
    /// Create a new sheet reader for the given workbook path
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// List the workbook's sheet names in workbook order
    pub fn sheet_names(&self) -> RosterResult<Vec<String>> {
        let workbook = self.open()?;
        Ok(workbook.sheet_names().to_vec())
    }

    /// Resolve which sheet to process. An explicit name wins; otherwise a
    /// single-sheet workbook selects its only sheet, and a multi-sheet
    /// workbook requires the caller to choose.
    pub fn select_sheet(&self, requested: Option<&str>) -> RosterResult<String> {
        let available = self.sheet_names()?;

        match requested {
            Some(name) => {
                if available.iter().any(|s| s == name) {
                    Ok(name.to_string())
                } else {
                    Err(RosterError::SheetNotFound {
                        name: name.to_string(),
                        available,
                    })
                }
            }
            None => {
                if available.len() == 1 {
                    Ok(available.into_iter().next().unwrap_or_default())
                } else {
                    Err(RosterError::SheetSelectionRequired { available })
                }
            }
        }
    }

    /// Read one worksheet into memory: row 0 becomes the column names,
    /// the remaining rows become data rows.
    pub fn read_sheet(&self, sheet_name: &str) -> RosterResult<Sheet> {
        let mut workbook = self.open()?;

        let range = workbook.worksheet_range(sheet_name).map_err(|_| {
            RosterError::SheetNotFound {
                name: sheet_name.to_string(),
                available: workbook.sheet_names().to_vec(),
            }
        })?;

        let mut sheet = Sheet::new(sheet_name);
        let (height, width) = range.get_size();
        if height == 0 {
            return Ok(sheet);
        }

        // Header row (row 0); unnamed header cells get a positional fallback
        for col in 0..width {
            let name = match range.get((0, col)) {
                Some(Data::String(s)) => s.clone(),
                Some(Data::Empty) | None => format!("col_{}", col),
                Some(cell) => Self::convert_cell(cell).as_text(),
            };
            sheet.columns.push(name);
        }

        // Data rows
        for row in 1..height {
            let mut cells = Vec::with_capacity(width);
            for col in 0..width {
                let cell = match range.get((row, col)) {
                    Some(cell) => Self::convert_cell(cell),
                    None => CellValue::Empty,
                };
                cells.push(cell);
            }
            sheet.rows.push(cells);
        }

        Ok(sheet)
    }

    fn open(&self) -> RosterResult<Xlsx<std::io::BufReader<std::fs::File>>> {
        ensure_xlsx(&self.path)?;
        open_workbook(&self.path)
            .map_err(|e| RosterError::Import(format!("Failed to open Excel file: {}", e)))
    }

    /// Convert a calamine cell into the reformatter's cell model
    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Boolean(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(naive) => CellValue::DateTime(naive),
                // Fall back to the raw serial when the value is out of range
                None => CellValue::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
            Data::Error(_) | Data::Empty => CellValue::Empty,
        }
    }
}

/// Check the extension before opening; everything but `.xlsx` is rejected
fn ensure_xlsx(path: &Path) -> RosterResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("xlsx") => Ok(()),
        _ => Err(RosterError::UnsupportedExtension(
            path.display().to_string(),
        )),
    }
}
