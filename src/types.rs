//! Core data model: cell values, sheets, and the fixed roster schema.

use chrono::{NaiveDateTime, Timelike};

/// The three source columns every roster sheet must provide, matched
/// case-sensitively after trimming surrounding whitespace from headers.
pub const REQUIRED_COLUMNS: [&str; 3] = ["Full name", "Registration No.", "Department"];

/// A single spreadsheet cell, narrowed to the kinds the reformatter supports.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    DateTime(NaiveDateTime),
    Empty,
}

impl CellValue {
    /// Render the cell as text with one deterministic rule per kind:
    /// text verbatim, numbers with trailing zeros trimmed (`3.0` → `3`),
    /// booleans as `TRUE`/`FALSE`, dates as ISO-8601 (date-only when the
    /// time component is midnight), empty cells as the empty string.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Boolean(b) => {
                if *b {
                    "TRUE".to_string()
                } else {
                    "FALSE".to_string()
                }
            }
            CellValue::DateTime(dt) => {
                if dt.hour() == 0 && dt.minute() == 0 && dt.second() == 0 {
                    dt.format("%Y-%m-%d").to_string()
                } else {
                    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
                }
            }
            CellValue::Empty => String::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// Format a number for display, removing unnecessary decimal places
fn format_number(n: f64) -> String {
    // Round to 6 decimal places; also absorbs float precision artifacts
    let rounded = (n * 1e6).round() / 1e6;
    let formatted = format!("{:.6}", rounded)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string();
    // Values rounding to negative zero print as plain zero
    if formatted == "-0" {
        "0".to_string()
    } else {
        formatted
    }
}

/// One worksheet pulled into memory: a header row of column names plus
/// data rows. The source workbook is never written back.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_text_renders_verbatim() {
        let cell = CellValue::Text("Jane \"JD\" Doe".to_string());
        assert_eq!(cell.as_text(), "Jane \"JD\" Doe");
    }

    #[test]
    fn test_number_trims_trailing_zeros() {
        assert_eq!(CellValue::Number(3.0).as_text(), "3");
        assert_eq!(CellValue::Number(2.50).as_text(), "2.5");
        assert_eq!(CellValue::Number(-1.25).as_text(), "-1.25");
        assert_eq!(CellValue::Number(0.0).as_text(), "0");
        assert_eq!(CellValue::Number(1234567.0).as_text(), "1234567");
    }

    #[test]
    fn test_number_negative_zero_renders_as_zero() {
        assert_eq!(CellValue::Number(-0.0).as_text(), "0");
        assert_eq!(CellValue::Number(-1e-9).as_text(), "0");
    }

    #[test]
    fn test_boolean_renders_excel_style() {
        assert_eq!(CellValue::Boolean(true).as_text(), "TRUE");
        assert_eq!(CellValue::Boolean(false).as_text(), "FALSE");
    }

    #[test]
    fn test_midnight_datetime_renders_date_only() {
        let dt = NaiveDate::from_ymd_opt(2024, 9, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CellValue::DateTime(dt).as_text(), "2024-09-01");
    }

    #[test]
    fn test_datetime_with_time_renders_iso8601() {
        let dt = NaiveDate::from_ymd_opt(2024, 9, 1)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap();
        assert_eq!(CellValue::DateTime(dt).as_text(), "2024-09-01T14:30:05");
    }

    #[test]
    fn test_empty_renders_empty_string() {
        assert_eq!(CellValue::Empty.as_text(), "");
        assert!(CellValue::Empty.is_empty());
    }

    #[test]
    fn test_sheet_row_count() {
        let mut sheet = Sheet::new("Roster");
        assert_eq!(sheet.row_count(), 0);
        sheet.columns = vec!["Full name".to_string()];
        sheet.rows.push(vec![CellValue::Text("A".to_string())]);
        assert_eq!(sheet.row_count(), 1);
    }
}
