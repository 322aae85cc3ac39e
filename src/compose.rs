//! Comparison-text construction.
//!
//! The text built here is what gets embedded for each candidate account, so it
//! must stay a pure, deterministic function of the record.

use crate::accounts::{AccountRecord, is_missing};
use crate::constants::{NEGATIVE_PREFIX, POSITIVE_PREFIX};

/// Builds the comparison text of one account.
///
/// Joins name, description and the prefixed positive/negative examples with a
/// single space. Empty and `nan` fields are left out entirely, prefix included.
pub fn comparison_text(record: &AccountRecord) -> String {
    let positive = present(&record.positive_examples).map(|v| format!("{POSITIVE_PREFIX} {v}"));
    let negative = present(&record.negative_examples).map(|v| format!("{NEGATIVE_PREFIX} {v}"));

    [
        present(&record.name).map(str::to_string),
        present(&record.description).map(str::to_string),
        positive,
        negative,
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" ")
}

/// Builds the text embedded for the user's input.
pub fn query_text(name: &str, description: &str) -> String {
    [name.trim(), description.trim()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !is_missing(value)).map(str::trim)
}
