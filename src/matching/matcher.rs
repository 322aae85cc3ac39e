use tracing::debug;

use super::ladder::MatchPolicy;
use super::types::{MatchTier, RankedIndex, Selection};

/// Applies a [`MatchPolicy`] to a score vector.
#[derive(Debug, Clone, Default)]
pub struct CascadingMatcher {
    policy: MatchPolicy,
}

impl CascadingMatcher {
    pub fn new(policy: MatchPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchPolicy {
        &self.policy
    }

    /// Selects the final candidates for `scores`.
    ///
    /// Each rung keeps indices with `score > threshold` (strict). The first
    /// non-empty rung is returned sorted by score descending, ties in index
    /// order. If no rung matches, the top `fallback_k` scores are returned
    /// instead, or nothing when the fallback is disabled.
    pub fn select(&self, scores: &[f32]) -> Selection {
        if scores.is_empty() {
            debug!("No candidates to match");
            return Selection {
                ranked: Vec::new(),
                tier: MatchTier::NoCandidates,
            };
        }

        for (rung, &threshold) in self.policy.ladder.thresholds().iter().enumerate() {
            let accepted: Vec<RankedIndex> = scores
                .iter()
                .enumerate()
                .filter(|&(_, &score)| score > threshold)
                .map(|(index, &score)| RankedIndex { index, score })
                .collect();

            debug!(threshold, rung, hits = accepted.len(), "Evaluated threshold");

            if !accepted.is_empty() {
                return Selection {
                    ranked: rank_descending(accepted),
                    tier: MatchTier::Threshold { threshold, rung },
                };
            }
        }

        if !self.policy.fallback_enabled() {
            return Selection {
                ranked: Vec::new(),
                tier: MatchTier::NoMatch {
                    lowest_threshold: self.policy.ladder.lowest(),
                },
            };
        }

        let all: Vec<RankedIndex> = scores
            .iter()
            .enumerate()
            .map(|(index, &score)| RankedIndex { index, score })
            .collect();
        let mut ranked = rank_descending(all);
        ranked.truncate(self.policy.fallback_k);

        debug!(
            fallback_k = self.policy.fallback_k,
            returned = ranked.len(),
            "No threshold met, using top-K fallback"
        );

        Selection {
            tier: MatchTier::Fallback { size: ranked.len() },
            ranked,
        }
    }
}

fn rank_descending(mut ranked: Vec<RankedIndex>) -> Vec<RankedIndex> {
    // Stable sort keeps index order among equal scores. NaN ranks above 1.0.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked
}
