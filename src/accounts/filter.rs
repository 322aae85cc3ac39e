use tracing::debug;

use super::category::{CategorySelection, classify};
use super::record::AccountRecord;

/// Records that survived category filtering, in source order.
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    records: Vec<&'a AccountRecord>,
    label: String,
}

impl<'a> CandidateSet<'a> {
    pub fn records(&self) -> &[&'a AccountRecord] {
        &self.records
    }

    /// Label of the selection that produced this set.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Narrows the account table to one category or subcategory.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryFilter;

impl CategoryFilter {
    pub fn new() -> Self {
        Self
    }

    /// Keeps records whose account number classifies into `selection`.
    ///
    /// Records with empty or non-numeric account numbers never match.
    pub fn apply<'a>(
        &self,
        records: &'a [AccountRecord],
        selection: &CategorySelection,
    ) -> CandidateSet<'a> {
        let records: Vec<&AccountRecord> = records
            .iter()
            .filter(|record| {
                classify(&record.account_number)
                    .is_some_and(|classification| selection.matches(&classification))
            })
            .collect();

        debug!(
            selection = %selection,
            candidates = records.len(),
            "Filtered accounts by category"
        );

        CandidateSet {
            records,
            label: selection.label(),
        }
    }
}
