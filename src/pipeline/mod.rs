//! The matching pipeline.
//!
//! One request runs filter → compose → embed → score → cascade → assemble to
//! completion. The embedder is the only long-lived state and is only read;
//! everything else is per request.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::PipelineError;

use tracing::{debug, info, warn};

use crate::accounts::{AccountRecord, CategoryFilter, CategorySelection};
use crate::compose::{comparison_text, query_text};
use crate::embedding::{Embedder, EmbeddingError};
use crate::matching::{CascadingMatcher, Match, MatchPolicy, MatchTier};
use crate::report::{ResultTable, StatusMessage};
use crate::scoring::SimilarityScorer;

/// Mode-dependent knobs of the pipeline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineOptions {
    pub policy: MatchPolicy,
    /// When false, request subcategories are ignored.
    pub subcategories: bool,
}

impl PipelineOptions {
    /// Single threshold, no fallback, top-level categories only.
    pub fn basic() -> Self {
        Self {
            policy: MatchPolicy::basic(),
            subcategories: false,
        }
    }

    /// Threshold ladder, top-5 fallback, subcategories.
    pub fn cascading() -> Self {
        Self {
            policy: MatchPolicy::cascading(),
            subcategories: true,
        }
    }
}

/// What the user submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchRequest {
    pub name: String,
    pub description: String,
    pub selection: CategorySelection,
}

impl MatchRequest {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        selection: CategorySelection,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            selection,
        }
    }

    /// Text embedded for the input side of the comparison.
    pub fn query_text(&self) -> String {
        query_text(&self.name, &self.description)
    }

    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.description.trim().is_empty()
    }
}

/// Everything one request produced.
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub table: ResultTable,
    pub matches: Vec<Match>,
    pub tier: MatchTier,
    pub status: StatusMessage,
    /// Size of the filtered candidate set.
    pub candidate_count: usize,
    /// Selection actually applied (subcategory dropped when disabled).
    pub selection: CategorySelection,
}

/// Parametrised matching pipeline over an injected [`Embedder`].
#[derive(Debug)]
pub struct MatchingPipeline<E> {
    embedder: E,
    filter: CategoryFilter,
    scorer: SimilarityScorer,
    matcher: CascadingMatcher,
    options: PipelineOptions,
}

impl<E: Embedder> MatchingPipeline<E> {
    pub fn new(embedder: E, options: PipelineOptions) -> Self {
        Self {
            embedder,
            filter: CategoryFilter::new(),
            scorer: SimilarityScorer::new(),
            matcher: CascadingMatcher::new(options.policy.clone()),
            options,
        }
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Runs one request against `accounts`.
    ///
    /// Empty candidate sets and unmatched cascades are reported through
    /// [`MatchReport::status`]; only embedding and scoring failures are errors.
    pub fn run(
        &self,
        accounts: &[AccountRecord],
        request: &MatchRequest,
    ) -> Result<MatchReport, PipelineError> {
        let selection = self.effective_selection(&request.selection);

        if request.is_blank() {
            warn!("Matching request has neither name nor description");
        }

        let candidates = self.filter.apply(accounts, &selection);

        let (matches, tier) = if candidates.is_empty() {
            debug!(selection = %selection, "Empty candidate set, skipping embedding");
            (Vec::new(), MatchTier::NoCandidates)
        } else {
            let texts: Vec<String> = candidates
                .records()
                .iter()
                .map(|record| comparison_text(record))
                .collect();
            let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();

            let candidate_vectors = self.encode_checked(&text_refs)?;
            let query = request.query_text();
            let mut query_vectors = self.encode_checked(&[query.as_str()])?;
            // Exactly one vector, checked above.
            let query_vector = query_vectors.remove(0);

            let scores = self.scorer.score_all(&query_vector, &candidate_vectors)?;
            let selected = self.matcher.select(&scores);

            let matches: Vec<Match> = selected
                .ranked
                .iter()
                .map(|ranked| Match::new(candidates.records()[ranked.index].clone(), ranked.score))
                .collect();

            (matches, selected.tier)
        };

        let table = ResultTable::assemble(
            &request.name,
            &request.description,
            candidates.label(),
            &matches,
        );

        let status = StatusMessage::from_tier(
            &tier,
            matches.len(),
            self.options.policy.ladder.lowest(),
        );

        info!(
            selection = %selection,
            candidates = candidates.len(),
            matches = matches.len(),
            tier = tier.debug_status(),
            "Matching request complete"
        );

        Ok(MatchReport {
            table,
            matches,
            tier,
            status,
            candidate_count: candidates.len(),
            selection,
        })
    }

    fn effective_selection(&self, requested: &CategorySelection) -> CategorySelection {
        if self.options.subcategories || requested.sub().is_none() {
            return *requested;
        }

        warn!(
            requested = %requested,
            "Subcategories are disabled, matching on the top-level category"
        );
        requested.without_subcategory()
    }

    fn encode_checked(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let vectors = self.embedder.encode(texts)?;
        if vectors.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                expected: texts.len(),
                actual: vectors.len(),
            });
        }
        Ok(vectors)
    }
}
