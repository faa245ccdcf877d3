use thiserror::Error;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Unsupported file extension: {0} (expected .xlsx)")]
    UnsupportedExtension(String),

    #[error("Sheet '{name}' not found (available: {})", available.join(", "))]
    SheetNotFound {
        name: String,
        available: Vec<String>,
    },

    #[error("Workbook has multiple sheets, select one of: {}", available.join(", "))]
    SheetSelectionRequired { available: Vec<String> },

    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}
