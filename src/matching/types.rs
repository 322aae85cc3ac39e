use std::fmt;

use crate::accounts::AccountRecord;
use crate::constants::SCORE_DECIMALS;

/// Rounds a score for display. Never use the result for comparisons.
pub fn round_score(score: f32) -> f64 {
    let factor = 10f64.powi(SCORE_DECIMALS as i32);
    (f64::from(score) * factor).round() / factor
}

/// Candidate position and its full-precision score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedIndex {
    pub index: usize,
    pub score: f32,
}

/// How the final match set was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchTier {
    /// A ladder rung accepted at least one candidate.
    Threshold {
        threshold: f32,
        /// Zero-based position of the rung in the ladder.
        rung: usize,
    },
    /// No rung matched; top-K by score regardless of threshold.
    Fallback { size: usize },
    /// No rung matched and the fallback is disabled.
    NoMatch { lowest_threshold: f32 },
    /// Category filtering left nothing to score.
    NoCandidates,
}

impl MatchTier {
    pub fn is_fallback(&self) -> bool {
        matches!(self, MatchTier::Fallback { .. })
    }

    /// Returns the accepting threshold, if a rung matched.
    pub fn threshold(&self) -> Option<f32> {
        match self {
            MatchTier::Threshold { threshold, .. } => Some(*threshold),
            _ => None,
        }
    }

    pub fn debug_status(&self) -> &'static str {
        match self {
            MatchTier::Threshold { .. } => "THRESHOLD",
            MatchTier::Fallback { .. } => "FALLBACK",
            MatchTier::NoMatch { .. } => "NO_MATCH",
            MatchTier::NoCandidates => "NO_CANDIDATES",
        }
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Threshold { threshold, rung } => {
                write!(f, "THRESHOLD (> {:.2}, rung {})", threshold, rung)
            }
            MatchTier::Fallback { size } => write!(f, "FALLBACK (top {})", size),
            MatchTier::NoMatch { lowest_threshold } => {
                write!(f, "NO_MATCH (nothing > {:.2})", lowest_threshold)
            }
            MatchTier::NoCandidates => write!(f, "NO_CANDIDATES"),
        }
    }
}

/// Outcome of the cascade over one score vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Accepted candidates, score descending.
    pub ranked: Vec<RankedIndex>,
    pub tier: MatchTier,
}

/// One accepted account with its similarity to the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub account: AccountRecord,
    /// Full-precision cosine similarity.
    pub score: f32,
}

impl Match {
    pub fn new(account: AccountRecord, score: f32) -> Self {
        Self { account, score }
    }

    pub fn rounded_score(&self) -> f64 {
        round_score(self.score)
    }
}
