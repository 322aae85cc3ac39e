use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MatchingError {
    #[error("threshold ladder must contain at least one threshold")]
    EmptyLadder,

    #[error("threshold {value} is outside [-1, 1]")]
    ThresholdOutOfRange { value: f32 },

    #[error("thresholds must be strictly descending: {previous} is followed by {next}")]
    NotDescending { previous: f32, next: f32 },

    #[error("failed to parse threshold '{value}'")]
    ParseThreshold { value: String },
}
