//! Ledger-match library crate (used by the binary and integration tests).
//!
//! Matches a newly described ledger account against an existing chart of
//! accounts by semantic similarity.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`MatchingPipeline`], [`MatchRequest`], [`MatchReport`] - One request, end to end
//! - [`Config`], [`MatchingMode`] - Environment-backed settings and presets
//!
//! ## Stages
//! - [`CategoryFilter`], [`CategorySelection`] - Candidate set by account-number prefix
//! - [`comparison_text`], [`query_text`] - Texts that get embedded
//! - [`Embedder`], [`SentenceEncoder`] - Text to vector
//! - [`SimilarityScorer`] - Cosine similarity
//! - [`CascadingMatcher`], [`ThresholdLadder`], [`MatchPolicy`] - Threshold ladder with
//!   top-K fallback
//! - [`ResultTable`], [`StatusMessage`] - Output rows, export and user message
//!
//! ## Input
//! - [`AccountTable`] - Chart-of-accounts workbook loader
//!
//! ## Test/Mock Support
//! [`MockEmbedder`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod accounts;
pub mod chart;
pub mod compose;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod matching;
pub mod pipeline;
pub mod report;
pub mod scoring;

pub use accounts::{
    AccountRecord, CandidateSet, Category, CategoryFilter, CategorySelection, Classification,
    SelectionError, Subcategory, classify,
};
pub use chart::{AccountTable, TableError};
pub use compose::{comparison_text, query_text};
pub use config::{Config, ConfigError, MatchingMode};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;
pub use embedding::{
    DevicePreference, Embedder, EmbeddingError, EncoderConfig, ModelProfile, SentenceEncoder,
};
pub use matching::{
    CascadingMatcher, Match, MatchPolicy, MatchTier, MatchingError, ThresholdLadder, round_score,
};
pub use pipeline::{MatchReport, MatchRequest, MatchingPipeline, PipelineError, PipelineOptions};
pub use report::{ReportError, ResultRow, ResultTable, ScoreCell, StatusMessage};
pub use scoring::{ScoringError, SimilarityScorer, cosine_similarity};
