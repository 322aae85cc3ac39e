use std::fmt;
use std::str::FromStr;

use crate::constants::{BASIC_THRESHOLDS, CASCADING_THRESHOLDS, DEFAULT_FALLBACK_K};

use super::error::MatchingError;

/// Strictly descending similarity cutoffs.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdLadder(Vec<f32>);

impl ThresholdLadder {
    pub fn new(thresholds: Vec<f32>) -> Result<Self, MatchingError> {
        if thresholds.is_empty() {
            return Err(MatchingError::EmptyLadder);
        }

        if let Some(&value) = thresholds
            .iter()
            .find(|t| !t.is_finite() || !(-1.0..=1.0).contains(*t))
        {
            return Err(MatchingError::ThresholdOutOfRange { value });
        }

        if let Some(pair) = thresholds.windows(2).find(|pair| pair[1] >= pair[0]) {
            return Err(MatchingError::NotDescending {
                previous: pair[0],
                next: pair[1],
            });
        }

        Ok(Self(thresholds))
    }

    pub fn single(threshold: f32) -> Result<Self, MatchingError> {
        Self::new(vec![threshold])
    }

    /// `[0.50]`
    pub fn basic() -> Self {
        Self(BASIC_THRESHOLDS.to_vec())
    }

    /// `[0.60, 0.55, 0.50]`
    pub fn cascading() -> Self {
        Self(CASCADING_THRESHOLDS.to_vec())
    }

    pub fn thresholds(&self) -> &[f32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most permissive (last) threshold.
    pub fn lowest(&self) -> f32 {
        // Non-empty by construction.
        self.0[self.0.len() - 1]
    }
}

impl FromStr for ThresholdLadder {
    type Err = MatchingError;

    /// Parses a comma-separated list such as `0.6, 0.55, 0.5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let thresholds = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f32>()
                    .map_err(|_| MatchingError::ParseThreshold {
                        value: part.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(thresholds)
    }
}

impl fmt::Display for ThresholdLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|t| format!("{t:.2}")).collect();
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Thresholds plus fallback size.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPolicy {
    pub ladder: ThresholdLadder,
    /// Top-K fallback size; `0` disables the fallback.
    pub fallback_k: usize,
}

impl MatchPolicy {
    pub fn new(ladder: ThresholdLadder, fallback_k: usize) -> Self {
        Self { ladder, fallback_k }
    }

    /// Single 0.50 threshold, no fallback.
    pub fn basic() -> Self {
        Self::new(ThresholdLadder::basic(), 0)
    }

    /// 0.60 / 0.55 / 0.50 ladder with a top-5 fallback.
    pub fn cascading() -> Self {
        Self::new(ThresholdLadder::cascading(), DEFAULT_FALLBACK_K)
    }

    pub fn fallback_enabled(&self) -> bool {
        self.fallback_k > 0
    }
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self::basic()
    }
}
