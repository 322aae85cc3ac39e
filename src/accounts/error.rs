use thiserror::Error;

use super::category::{Category, Subcategory};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("unknown category '{value}' (expected one of: bilanz, guv)")]
    UnknownCategory { value: String },

    #[error("unknown subcategory '{value}'")]
    UnknownSubcategory { value: String },

    #[error("subcategory {subcategory} does not belong to category {category}")]
    SubcategoryMismatch {
        category: Category,
        subcategory: Subcategory,
    },
}
