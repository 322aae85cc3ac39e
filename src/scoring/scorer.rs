use tracing::debug;

use super::error::ScoringError;

/// Cosine similarity `dot(a, b) / (|a| * |b|)`, clamped to `[-1, 1]`.
///
/// Returns `0.0` when either vector has zero norm. Both slices must have the
/// same length; extra elements of the longer one are ignored.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b)
        .fold((0.0f32, 0.0f32, 0.0f32), |(dot, na, nb), (&x, &y)| {
            (dot + x * y, na + x * x, nb + y * y)
        });

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }

    (dot / denom).clamp(-1.0, 1.0)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer;

impl SimilarityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Scores every candidate against `query`, preserving candidate order.
    ///
    /// An empty candidate list yields an empty score vector. Every returned
    /// score is finite.
    pub fn score_all(
        &self,
        query: &[f32],
        candidates: &[Vec<f32>],
    ) -> Result<Vec<f32>, ScoringError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        if query.is_empty() {
            return Err(ScoringError::EmptyQuery);
        }

        if let Some((index, candidate)) = candidates
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != query.len())
        {
            return Err(ScoringError::DimensionMismatch {
                index,
                expected: query.len(),
                actual: candidate.len(),
            });
        }

        let scores: Vec<f32> = candidates
            .iter()
            .map(|candidate| cosine_similarity(query, candidate))
            .collect();

        if let Some(index) = scores.iter().position(|score| !score.is_finite()) {
            return Err(ScoringError::NonFiniteScore { index });
        }

        debug!(
            candidates = scores.len(),
            max_score = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max),
            "Computed similarity scores"
        );

        Ok(scores)
    }
}
