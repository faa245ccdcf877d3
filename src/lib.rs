//! Rosterfmt - roster spreadsheet reformatter
//!
//! Reads an .xlsx workbook, selects one sheet, extracts the `Full name`,
//! `Registration No.`, and `Department` columns, and writes a new workbook
//! whose single column holds one quoted comma-joined string per source row.
//!
//! # Example
//!
//! ```no_run
//! use rosterfmt::excel::{FormattedWriter, SheetReader};
//! use rosterfmt::reformat::reformat;
//! use std::path::Path;
//!
//! let reader = SheetReader::new("roster.xlsx");
//! let sheet_name = reader.select_sheet(None)?;
//! let sheet = reader.read_sheet(&sheet_name)?;
//!
//! let rows = reformat(&sheet)?;
//! FormattedWriter::new(rows).write(Path::new("formatted_output.xlsx"))?;
//! # Ok::<(), rosterfmt::error::RosterError>(())
//! ```

pub mod api;
pub mod cli;
pub mod error;
pub mod excel;
pub mod reformat;
pub mod types;

// Re-export commonly used types
pub use error::{RosterError, RosterResult};
pub use types::{CellValue, Sheet, REQUIRED_COLUMNS};
