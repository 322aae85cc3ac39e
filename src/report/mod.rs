//! Result table assembly, status messages and spreadsheet export.

pub mod error;
mod export;
pub mod status;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use status::StatusMessage;
pub use table::{ResultRow, ResultTable, ScoreCell};
