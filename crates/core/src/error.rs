use thiserror::Error;

/// Errors that can occur during workbook operations
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Not a valid xlsx workbook: {0}")]
    Parse(String),

    #[error("Workbook write error: {0}")]
    Workbook(String),

    #[error("Sheet already exists: {name}")]
    SheetAlreadyExists { name: String },

    #[error("Sheet not found: {name}")]
    SheetNotFound { name: String },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SheetError>;
