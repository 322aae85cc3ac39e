//! Chart-of-accounts records and category filtering.
//!
//! Categories are never stored on a record. They are derived from the leading
//! digits of the account number each time a request filters the table.

pub mod category;
pub mod error;
pub mod filter;
pub mod record;


pub use category::{Category, CategorySelection, Classification, Subcategory, classify};
pub use error::SelectionError;
pub use filter::{CandidateSet, CategoryFilter};
pub use record::{AccountRecord, clean_field, is_missing};
