//! Chart-of-accounts loading.
//!
//! The input workbook is validated once, at load time: every required column
//! must be present in the header row of the first worksheet, and cell values
//! are normalised into [`AccountRecord`]s with explicit optional fields.

pub mod error;


pub use error::TableError;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use calamine::{Data, Reader, open_workbook_auto};
use tracing::{debug, info};

use crate::accounts::{AccountRecord, clean_field};
use crate::constants::{
    COL_ACCOUNT_NUMBER, COL_DESCRIPTION, COL_NAME, COL_NEGATIVE, COL_NEW_POSITION,
    COL_NEW_POSITION_DESCRIPTION, COL_POSITIVE, REQUIRED_COLUMNS,
};

/// The loaded chart of accounts, in source row order.
#[derive(Debug, Clone, Default)]
pub struct AccountTable {
    records: Vec<AccountRecord>,
    source: Option<PathBuf>,
}

impl AccountTable {
    /// Loads the first worksheet of an xlsx/xls/ods workbook.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        if !path.is_file() {
            return Err(TableError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let mut workbook = open_workbook_auto(path).map_err(|e| TableError::Unreadable {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| TableError::NoWorksheet {
                path: path.to_path_buf(),
            })?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| TableError::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let mut rows = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect::<Vec<_>>());

        let headers = rows.next().ok_or_else(|| TableError::EmptySheet {
            sheet: sheet_name.clone(),
        })?;

        let mut table = Self::from_rows(&headers, rows)?;
        table.source = Some(path.to_path_buf());

        info!(
            path = %path.display(),
            sheet = %sheet_name,
            accounts = table.len(),
            "Loaded chart of accounts"
        );

        Ok(table)
    }

    /// Builds a table from a header row and data rows of stringified cells.
    ///
    /// Column order is free; extra columns are ignored. Rows whose cells are
    /// all missing are skipped.
    pub fn from_rows<I, R>(headers: &[String], rows: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[String]>,
    {
        let layout = ColumnLayout::resolve(headers)?;

        let mut skipped = 0usize;
        let records: Vec<AccountRecord> = rows
            .into_iter()
            .filter_map(|row| {
                let record = layout.record(row.as_ref());
                if record.is_none() {
                    skipped += 1;
                }
                record
            })
            .collect();

        debug!(records = records.len(), skipped, "Parsed account rows");

        Ok(Self {
            records,
            source: None,
        })
    }

    pub fn from_records(records: Vec<AccountRecord>) -> Self {
        Self {
            records,
            source: None,
        }
    }

    pub fn records(&self) -> &[AccountRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Path the table was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Positions of the required columns within a header row.
struct ColumnLayout {
    index: HashMap<&'static str, usize>,
}

impl ColumnLayout {
    fn resolve(headers: &[String]) -> Result<Self, TableError> {
        let mut index = HashMap::new();

        for column in REQUIRED_COLUMNS {
            let position = headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or(TableError::MissingColumn { column })?;
            index.insert(column, position);
        }

        Ok(Self { index })
    }

    fn cell<'a>(&self, row: &'a [String], column: &'static str) -> &'a str {
        self.index
            .get(column)
            .and_then(|&i| row.get(i))
            .map(String::as_str)
            .unwrap_or_default()
    }

    fn record(&self, row: &[String]) -> Option<AccountRecord> {
        let field = |column| clean_field(self.cell(row, column));

        let record = AccountRecord {
            account_number: field(COL_ACCOUNT_NUMBER).unwrap_or_default(),
            name: field(COL_NAME),
            description: field(COL_DESCRIPTION),
            positive_examples: field(COL_POSITIVE),
            negative_examples: field(COL_NEGATIVE),
            new_position_code: field(COL_NEW_POSITION),
            new_position_description: field(COL_NEW_POSITION_DESCRIPTION),
        };

        let blank = record.account_number.is_empty()
            && record.name.is_none()
            && record.description.is_none()
            && record.positive_examples.is_none()
            && record.negative_examples.is_none()
            && record.new_position_code.is_none()
            && record.new_position_description.is_none();

        (!blank).then_some(record)
    }
}

/// Stringifies a cell. Integral floats drop their fraction so numeric account
/// numbers such as `87100.0` read as `87100`.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", *f as i64)
        }
        other => other.to_string().trim().to_string(),
    }
}
