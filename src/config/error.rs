//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::embedding::EmbeddingError;
use crate::matching::MatchingError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Mode is neither `basic` nor `cascading`.
    #[error("invalid matching mode '{value}': expected basic or cascading")]
    InvalidMode { value: String },

    /// Model profile could not be parsed.
    #[error("invalid model profile '{value}': {source}")]
    InvalidModel {
        value: String,
        #[source]
        source: EmbeddingError,
    },

    /// Device preference could not be parsed.
    #[error("invalid device '{value}': {source}")]
    InvalidDevice {
        value: String,
        #[source]
        source: EmbeddingError,
    },

    /// Threshold list is malformed or not strictly descending.
    #[error("invalid thresholds '{value}': {source}")]
    InvalidThresholds {
        value: String,
        #[source]
        source: MatchingError,
    },

    /// Boolean switch is not one of the accepted spellings.
    #[error("invalid value '{value}' for {name}: expected true or false")]
    InvalidBool { name: &'static str, value: String },

    /// No encoder directory configured and the stub was not requested.
    #[error("no encoder model: set LEDGER_MATCH_MODEL_DIR or LEDGER_MATCH_STUB=true")]
    MissingModelDir,

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },
}
