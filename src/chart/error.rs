use std::path::PathBuf;
use thiserror::Error;

/// Fatal problems with the chart-of-accounts input.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("account table not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read account table {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("account table {path} contains no worksheets")]
    NoWorksheet { path: PathBuf },

    #[error("worksheet '{sheet}' is empty")]
    EmptySheet { sheet: String },

    #[error("required column '{column}' is missing from the account table")]
    MissingColumn { column: &'static str },
}
