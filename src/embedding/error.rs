use std::path::PathBuf;
use thiserror::Error;

/// Failures of the sentence encoder (and of injected embedders).
///
/// Any of these aborts the current matching request.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// Model directory or one of its required files is missing.
    #[error("sentence encoder files not found at {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load sentence encoder: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("encoding failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    /// Bad profile, device or encoder settings.
    #[error("invalid encoder configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The embedder broke the one-vector-per-text contract.
    #[error("embedder returned {actual} vectors for {expected} texts")]
    CountMismatch { expected: usize, actual: usize },
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for EmbeddingError {
    fn from(err: std::io::Error) -> Self {
        EmbeddingError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}
