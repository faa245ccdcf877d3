//! Excel import/export module
//!
//! - Import: .xlsx worksheets → in-memory `Sheet` rows (calamine)
//! - Export: formatted output table → single-column .xlsx (rust_xlsxwriter)

mod exporter;
mod importer;

pub use exporter::FormattedWriter;
pub use importer::SheetReader;
