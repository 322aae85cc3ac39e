//! Cosine similarity between the input embedding and candidate embeddings.
//!
//! Scores are raw cosine values in `[-1, 1]`. No rescaling or calibration is
//! applied; threshold decisions live in [`crate::matching`].

pub mod error;
pub mod scorer;

#[cfg(test)]
mod tests;

pub use error::ScoringError;
pub use scorer::{SimilarityScorer, cosine_similarity};
