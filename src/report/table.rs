use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::{
    COL_ACCOUNT_NUMBER, COL_DESCRIPTION, COL_NAME, COL_NEGATIVE, COL_NEW_POSITION,
    COL_NEW_POSITION_DESCRIPTION, COL_POSITIVE, COL_SCORE, INPUT_SENTINEL,
};
use crate::matching::Match;

use super::error::ReportError;

/// Widest cell rendered by [`ResultTable::to_text`], in characters.
const PREVIEW_CELL_WIDTH: usize = 40;

/// Score column value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScoreCell {
    /// Marker of the input summary row.
    Input,
    /// Score rounded to two decimals.
    Score(f64),
}

impl fmt::Display for ScoreCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreCell::Input => f.write_str(INPUT_SENTINEL),
            ScoreCell::Score(score) => write!(f, "{:.2}", score),
        }
    }
}

impl Serialize for ScoreCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ScoreCell::Input => serializer.serialize_str(INPUT_SENTINEL),
            ScoreCell::Score(score) => serializer.serialize_f64(*score),
        }
    }
}

/// One output row. Missing values are empty strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    #[serde(rename = "Score")]
    pub score: ScoreCell,
    #[serde(rename = "Sachkontonummer")]
    pub account_number: String,
    #[serde(rename = "Kontenbezeichnung")]
    pub name: String,
    #[serde(rename = "Beschreibung")]
    pub description: String,
    #[serde(rename = "Positiv")]
    pub positive_examples: String,
    #[serde(rename = "Negativ")]
    pub negative_examples: String,
    #[serde(rename = "Position neu")]
    pub new_position_code: String,
    #[serde(rename = "Positionsbeschreibung neu")]
    pub new_position_description: String,
}

impl ResultRow {
    fn from_match(m: &Match) -> Self {
        let account = &m.account;
        let text = |field: &Option<String>| field.clone().unwrap_or_default();

        Self {
            score: ScoreCell::Score(m.rounded_score()),
            account_number: account.account_number.clone(),
            name: text(&account.name),
            description: text(&account.description),
            positive_examples: text(&account.positive_examples),
            negative_examples: text(&account.negative_examples),
            new_position_code: text(&account.new_position_code),
            new_position_description: text(&account.new_position_description),
        }
    }

    /// Text columns in header order, after the score.
    pub fn text_cells(&self) -> [&str; 7] {
        [
            &self.account_number,
            &self.name,
            &self.description,
            &self.positive_examples,
            &self.negative_examples,
            &self.new_position_code,
            &self.new_position_description,
        ]
    }

    pub fn is_input(&self) -> bool {
        self.score == ScoreCell::Input
    }
}

/// Input summary row followed by matches, score descending.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub const HEADERS: [&'static str; 8] = [
        COL_SCORE,
        COL_ACCOUNT_NUMBER,
        COL_NAME,
        COL_DESCRIPTION,
        COL_POSITIVE,
        COL_NEGATIVE,
        COL_NEW_POSITION,
        COL_NEW_POSITION_DESCRIPTION,
    ];

    /// Builds the table. `matches` must already be ranked.
    ///
    /// The input row carries the raw name and description and puts the
    /// category label in the `Position neu` column.
    pub fn assemble(
        name: &str,
        description: &str,
        category_label: &str,
        matches: &[Match],
    ) -> Self {
        let input = ResultRow {
            score: ScoreCell::Input,
            account_number: String::new(),
            name: name.to_string(),
            description: description.to_string(),
            positive_examples: String::new(),
            negative_examples: String::new(),
            new_position_code: category_label.to_string(),
            new_position_description: String::new(),
        };

        let rows = std::iter::once(input)
            .chain(matches.iter().map(ResultRow::from_match))
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn input_row(&self) -> &ResultRow {
        &self.rows[0]
    }

    pub fn match_rows(&self) -> &[ResultRow] {
        &self.rows[1..]
    }

    pub fn match_count(&self) -> usize {
        self.rows.len() - 1
    }

    /// Total number of rows, including the input row.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Renders an aligned plain-text preview for terminals.
    pub fn to_text(&self) -> String {
        let grid: Vec<Vec<String>> = std::iter::once(
            Self::HEADERS.iter().map(|h| h.to_string()).collect(),
        )
        .chain(self.rows.iter().map(|row| {
            std::iter::once(row.score.to_string())
                .chain(row.text_cells().iter().map(|cell| clip(cell)))
                .collect()
        }))
        .collect();

        let widths: Vec<usize> = (0..Self::HEADERS.len())
            .map(|col| {
                grid.iter()
                    .map(|line| line[col].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        for line in &grid {
            let padded: Vec<String> = line
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{cell:<width$}"))
                .collect();
            out.push_str(padded.join(" | ").trim_end());
            out.push('\n');
        }
        out
    }
}

fn clip(cell: &str) -> String {
    let single_line = cell.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= PREVIEW_CELL_WIDTH {
        return single_line;
    }
    let mut clipped: String = single_line.chars().take(PREVIEW_CELL_WIDTH - 1).collect();
    clipped.push('…');
    clipped
}
