//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;

use ledgermatch::constants::REQUIRED_COLUMNS;
use rust_xlsxwriter::Workbook;

/// One chart-of-accounts row in column order.
pub struct ChartRow {
    pub number: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub positive: &'static str,
    pub negative: &'static str,
    pub position: &'static str,
    pub position_description: &'static str,
}

impl ChartRow {
    pub const fn new(number: &'static str, name: &'static str) -> Self {
        Self {
            number,
            name,
            description: "",
            positive: "",
            negative: "",
            position: "",
            position_description: "",
        }
    }

    pub const fn described(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    fn cells(&self) -> [&'static str; 7] {
        [
            self.number,
            self.name,
            self.description,
            self.positive,
            self.negative,
            self.position,
            self.position_description,
        ]
    }
}

/// Nine balance accounts (prefixes 1-5), one account with a leading zero that
/// belongs to no category, and ten income statement accounts (6-9).
pub fn sample_chart() -> Vec<ChartRow> {
    vec![
        ChartRow::new("1000", "Kasse").described("Bargeldbestand"),
        ChartRow::new("1200", "Bank").described("Guthaben bei Kreditinstituten"),
        ChartRow::new("1400", "Forderungen aus Lieferungen"),
        ChartRow::new("2000", "Gezeichnetes Kapital"),
        ChartRow::new("2900", "Gewinnrücklagen"),
        ChartRow::new("3000", "Rückstellungen für Pensionen"),
        ChartRow::new("3300", "Verbindlichkeiten aus Lieferungen"),
        ChartRow::new("4000", "Darlehen"),
        ChartRow::new("5000", "Rechnungsabgrenzung passiv"),
        ChartRow::new("0800", "Abgrenzungskonto"),
        ChartRow::new("6000", "Umsatzerlöse").described("Erlöse aus Verkauf"),
        ChartRow::new("6500", "Sonstige Erträge"),
        ChartRow::new("7000", "Materialaufwand"),
        ChartRow::new("7400", "Personalaufwand"),
        ChartRow::new("7800", "Abschreibungen"),
        ChartRow::new("8000", "Zinserträge"),
        ChartRow::new("8500", "Zinsaufwand"),
        ChartRow::new("87100", "Körperschaftsteuer").described("Steuern vom Einkommen"),
        ChartRow::new("8900", "Sonstige Steuern"),
        ChartRow::new("9000", "Außerordentliche Aufwendungen"),
    ]
}

/// Writes `rows` under the required header into a fresh workbook at `path`.
pub fn write_chart(path: &Path, rows: &[ChartRow]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in REQUIRED_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }

    for (i, row) in rows.iter().enumerate() {
        let line = (i + 1) as u32;
        for (col, cell) in row.cells().iter().enumerate() {
            if col == 0 {
                if let Ok(number) = cell.parse::<f64>() {
                    if !cell.starts_with('0') {
                        sheet.write_number(line, 0, number).unwrap();
                        continue;
                    }
                }
            }
            if !cell.is_empty() {
                sheet.write_string(line, col as u16, *cell).unwrap();
            }
        }
    }

    workbook.save(path).unwrap();
}
