//! Cascading threshold acceptance.
//!
//! A [`ThresholdLadder`] is tried from strictest to most permissive; the first
//! rung that accepts at least one candidate wins and lower rungs are never
//! evaluated. When every rung comes up empty, an optional top-K fallback
//! guarantees a non-empty result for non-empty candidate sets.

pub mod error;
pub mod ladder;
pub mod matcher;
pub mod types;


pub use error::MatchingError;
pub use ladder::{MatchPolicy, ThresholdLadder};
pub use matcher::CascadingMatcher;
pub use types::{Match, MatchTier, RankedIndex, Selection, round_score};
