use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::scoring::ScoringError;

/// Failures that abort a matching request. No partial result is produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("scoring failed: {0}")]
    Scoring(#[from] ScoringError),
}
