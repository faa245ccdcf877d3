//! Error display tests

use rosterfmt::RosterError;

#[test]
fn test_import_error_display() {
    let err = RosterError::Import("bad zip".to_string());
    assert_eq!(err.to_string(), "Import error: bad zip");
}

#[test]
fn test_export_error_display() {
    let err = RosterError::Export("disk full".to_string());
    assert_eq!(err.to_string(), "Export error: disk full");
}

#[test]
fn test_unsupported_extension_display() {
    let err = RosterError::UnsupportedExtension("roster.csv".to_string());
    assert_eq!(
        err.to_string(),
        "Unsupported file extension: roster.csv (expected .xlsx)"
    );
}

#[test]
fn test_sheet_not_found_lists_available() {
    let err = RosterError::SheetNotFound {
        name: "Term 3".to_string(),
        available: vec!["Term 1".to_string(), "Term 2".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "Sheet 'Term 3' not found (available: Term 1, Term 2)"
    );
}

#[test]
fn test_sheet_selection_required_lists_available() {
    let err = RosterError::SheetSelectionRequired {
        available: vec!["Term 1".to_string(), "Term 2".to_string()],
    };
    assert_eq!(
        err.to_string(),
        "Workbook has multiple sheets, select one of: Term 1, Term 2"
    );
}

#[test]
fn test_missing_columns_joins_names() {
    let err = RosterError::MissingColumns(vec![
        "Full name".to_string(),
        "Department".to_string(),
    ]);
    assert_eq!(
        err.to_string(),
        "Missing required column(s): Full name, Department"
    );
}

#[test]
fn test_io_error_wraps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    let err = RosterError::from(io);
    assert!(err.to_string().starts_with("IO error:"));
}
