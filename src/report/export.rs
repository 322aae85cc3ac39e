use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::constants::RESULT_SHEET_NAME;

use super::error::ReportError;
use super::table::{ResultTable, ScoreCell};

impl ResultTable {
    /// Writes the table to an `.xlsx` workbook with a bold header row.
    ///
    /// Numeric scores are written as numbers with two decimals; the input row
    /// keeps its text marker.
    pub fn write_xlsx(&self, path: &Path) -> Result<(), ReportError> {
        let to_err = |source| ReportError::Xlsx {
            path: path.to_path_buf(),
            source,
        };

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(RESULT_SHEET_NAME).map_err(to_err)?;

        let header_format = Format::new().set_bold();
        let score_format = Format::new().set_num_format("0.00");

        for (col, header) in Self::HEADERS.iter().enumerate() {
            sheet
                .write_string_with_format(0, col as u16, *header, &header_format)
                .map_err(to_err)?;
        }

        for (index, row) in self.rows().iter().enumerate() {
            let line = (index + 1) as u32;

            match row.score {
                ScoreCell::Input => sheet.write_string(line, 0, row.score.to_string()),
                ScoreCell::Score(score) => {
                    sheet.write_number_with_format(line, 0, score, &score_format)
                }
            }
            .map_err(to_err)?;

            for (offset, value) in row.text_cells().iter().enumerate() {
                sheet
                    .write_string(line, (offset + 1) as u16, *value)
                    .map_err(to_err)?;
            }
        }

        workbook.save(path).map_err(to_err)?;

        info!(
            path = %path.display(),
            rows = self.len(),
            "Wrote result workbook"
        );

        Ok(())
    }
}
