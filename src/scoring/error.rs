use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("candidate {index} has dimension {actual}, query has {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("query embedding is empty")]
    EmptyQuery,

    /// NaN or infinite components in the query or a candidate.
    #[error("score for candidate {index} is not finite")]
    NonFiniteScore { index: usize },
}
