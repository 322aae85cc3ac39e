use super::*;
use crate::accounts::{Category, Subcategory};
use crate::embedding::{MockEmbedder, ModelProfile, SentenceEncoder};
use crate::report::ScoreCell;

const QUERY_VECTOR: [f32; 2] = [1.0, 0.0];

/// Unit vector whose cosine with `QUERY_VECTOR` equals `score`.
fn vector_with_score(score: f32) -> Vec<f32> {
    vec![score, (1.0 - score * score).sqrt()]
}

fn mixed_accounts() -> Vec<AccountRecord> {
    let balance = ["1000", "1200", "2000", "2800", "3000", "3100", "4000", "4400", "5000", "5900"];
    let income = ["6000", "6100", "7000", "7100", "8000", "8400", "87100", "8900", "9000", "9900"];

    balance
        .iter()
        .chain(income.iter())
        .map(|n| AccountRecord::new(*n, format!("Konto {n}")))
        .collect()
}

fn balance_request(name: &str, description: &str) -> MatchRequest {
    MatchRequest::new(name, description, CategorySelection::category(Category::Balance))
}

mod stub_encoder_tests {
    use super::*;

    fn pipeline(options: PipelineOptions) -> MatchingPipeline<SentenceEncoder> {
        let encoder = SentenceEncoder::stub(ModelProfile::Fast).expect("stub encoder");
        MatchingPipeline::new(encoder, options)
    }

    #[test]
    fn test_identical_text_ranks_first_with_score_one() {
        let mut accounts = mixed_accounts();
        accounts.push(
            AccountRecord::new("1800", "Bankguthaben").with_description("Girokonto Sparkasse"),
        );

        let report = pipeline(PipelineOptions::cascading())
            .run(&accounts, &balance_request("Bankguthaben", "Girokonto Sparkasse"))
            .unwrap();

        let top = &report.matches[0];
        assert_eq!(top.account.account_number, "1800");
        assert!((top.score - 1.0).abs() < 1e-4, "score {}", top.score);
        assert_eq!(report.table.match_rows()[0].score, ScoreCell::Score(1.0));
    }

    #[test]
    fn test_balance_filter_ignores_income_rows() {
        let report = pipeline(PipelineOptions::cascading())
            .run(&mixed_accounts(), &balance_request("Kasse", ""))
            .unwrap();

        assert_eq!(report.candidate_count, 10);
        assert!(report.matches.iter().all(|m| {
            let first = m.account.account_number.chars().next().unwrap();
            ('1'..='5').contains(&first)
        }));
    }

    #[test]
    fn test_tax_subcategory_with_granularity_on() {
        let request = MatchRequest::new(
            "Körperschaftsteuer",
            "",
            CategorySelection::subcategory(Subcategory::TaxResult),
        );

        let report = pipeline(PipelineOptions::cascading())
            .run(&mixed_accounts(), &request)
            .unwrap();

        assert_eq!(report.candidate_count, 1);
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].account.account_number, "87100");
        assert_eq!(report.table.input_row().new_position_code, "GuV / Steuern");
    }

    #[test]
    fn test_subcategory_ignored_when_granularity_off() {
        let request = MatchRequest::new(
            "Körperschaftsteuer",
            "",
            CategorySelection::subcategory(Subcategory::TaxResult),
        );

        let report = pipeline(PipelineOptions::basic())
            .run(&mixed_accounts(), &request)
            .unwrap();

        assert_eq!(report.candidate_count, 10);
        assert!(report.selection.sub().is_none());
        assert_eq!(report.table.input_row().new_position_code, "GuV");
    }

    #[test]
    fn test_blank_input_is_accepted() {
        let report = pipeline(PipelineOptions::cascading())
            .run(&mixed_accounts(), &balance_request("", "  "))
            .unwrap();

        assert_eq!(report.candidate_count, 10);
        assert!(!report.matches.is_empty());
        assert!(report.table.input_row().is_input());
    }
}

mod mock_embedder_tests {
    use super::*;

    fn accounts(n: usize) -> Vec<AccountRecord> {
        (0..n)
            .map(|i| AccountRecord::new(format!("{}", 1000 + i), format!("Konto {i}")))
            .collect()
    }

    #[test]
    fn test_all_low_scores_fall_back_to_top_five() {
        let embedder = MockEmbedder::new(2)
            .with_vector("Neues Konto", QUERY_VECTOR.to_vec())
            .with_default(vector_with_score(0.3));
        let pipeline = MatchingPipeline::new(embedder, PipelineOptions::cascading());

        let report = pipeline
            .run(&accounts(8), &balance_request("Neues Konto", ""))
            .unwrap();

        assert_eq!(report.tier, MatchTier::Fallback { size: 5 });
        assert_eq!(report.matches.len(), 5);
        assert_eq!(report.table.len(), 6);
        assert!(matches!(report.status, StatusMessage::Fallback { count: 5, .. }));
        let numbers: Vec<_> = report
            .matches
            .iter()
            .map(|m| m.account.account_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["1000", "1001", "1002", "1003", "1004"]);
    }

    #[test]
    fn test_fallback_with_fewer_candidates() {
        let embedder = MockEmbedder::new(2)
            .with_vector("Neues Konto", QUERY_VECTOR.to_vec())
            .with_default(vector_with_score(0.3));
        let pipeline = MatchingPipeline::new(embedder, PipelineOptions::cascading());

        let report = pipeline
            .run(&accounts(3), &balance_request("Neues Konto", ""))
            .unwrap();

        assert_eq!(report.tier, MatchTier::Fallback { size: 3 });
        assert_eq!(report.matches.len(), 3);
    }

    #[test]
    fn test_basic_mode_reports_no_match() {
        let embedder = MockEmbedder::new(2)
            .with_vector("Neues Konto", QUERY_VECTOR.to_vec())
            .with_default(vector_with_score(0.3));
        let pipeline = MatchingPipeline::new(embedder, PipelineOptions::basic());

        let report = pipeline
            .run(&accounts(4), &balance_request("Neues Konto", ""))
            .unwrap();

        assert!(report.matches.is_empty());
        assert_eq!(report.table.len(), 1);
        assert_eq!(report.status, StatusMessage::NoMatch { threshold: 0.5 });
    }

    #[test]
    fn test_highest_rung_is_preferred() {
        let embedder = MockEmbedder::new(2)
            .with_vector("Neues Konto", QUERY_VECTOR.to_vec())
            .with_vector("Konto 0", vector_with_score(0.58))
            .with_vector("Konto 1", vector_with_score(0.7))
            .with_vector("Konto 2", vector_with_score(0.52))
            .with_default(vector_with_score(0.1));
        let pipeline = MatchingPipeline::new(embedder, PipelineOptions::cascading());

        let report = pipeline
            .run(&accounts(4), &balance_request("Neues Konto", ""))
            .unwrap();

        assert_eq!(report.tier.threshold(), Some(0.60));
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].account.account_number, "1001");
        assert_eq!(
            report.status,
            StatusMessage::Success {
                count: 1,
                threshold: 0.60
            }
        );
    }

    #[test]
    fn test_matches_sorted_descending() {
        let embedder = MockEmbedder::new(2)
            .with_vector("Neues Konto", QUERY_VECTOR.to_vec())
            .with_vector("Konto 0", vector_with_score(0.62))
            .with_vector("Konto 1", vector_with_score(0.9))
            .with_vector("Konto 2", vector_with_score(0.75))
            .with_default(vector_with_score(0.1));
        let pipeline = MatchingPipeline::new(embedder, PipelineOptions::cascading());

        let report = pipeline
            .run(&accounts(4), &balance_request("Neues Konto", ""))
            .unwrap();

        let scores: Vec<f32> = report.matches.iter().map(|m| m.score).collect();
        assert_eq!(scores.len(), 3);
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(report.matches[0].account.account_number, "1001");
    }

    #[test]
    fn test_empty_candidate_set_skips_embedding() {
        let embedder = MockEmbedder::new(2);
        let pipeline = MatchingPipeline::new(embedder, PipelineOptions::cascading());
        let income_only = vec![AccountRecord::new("6000", "Umsatz")];

        let report = pipeline
            .run(&income_only, &balance_request("Kasse", ""))
            .unwrap();

        assert_eq!(report.tier, MatchTier::NoCandidates);
        assert_eq!(report.status, StatusMessage::NoCandidates);
        assert!(report.matches.is_empty());
        assert_eq!(report.table.len(), 1);
        assert_eq!(pipeline.embedder().calls(), 0);
    }

    #[test]
    fn test_embedding_failure_aborts_request() {
        let pipeline = MatchingPipeline::new(
            MockEmbedder::failing("model unavailable"),
            PipelineOptions::cascading(),
        );

        let err = pipeline
            .run(&accounts(2), &balance_request("Kasse", ""))
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Embedding(EmbeddingError::InferenceFailed { .. })
        ));
    }

    #[test]
    fn test_short_embedding_batch_is_rejected() {
        struct ShortEmbedder;

        impl Embedder for ShortEmbedder {
            fn encode(&self, _texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
                Ok(vec![vec![1.0, 0.0]])
            }

            fn embedding_dim(&self) -> usize {
                2
            }
        }

        let pipeline = MatchingPipeline::new(ShortEmbedder, PipelineOptions::cascading());
        let err = pipeline
            .run(&accounts(3), &balance_request("Kasse", ""))
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Embedding(EmbeddingError::CountMismatch {
                expected: 3,
                actual: 1
            })
        ));
    }

    #[test]
    fn test_dimension_mismatch_is_a_scoring_error() {
        // Candidates come back two-dimensional, the query three-dimensional.
        struct SplitEmbedder(MockEmbedder);

        impl Embedder for SplitEmbedder {
            fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
                if texts.len() == 1 && texts[0] == "Kasse" {
                    return Ok(vec![vec![1.0, 0.0, 0.0]]);
                }
                self.0.encode(texts)
            }

            fn embedding_dim(&self) -> usize {
                self.0.embedding_dim()
            }
        }

        let inner = MockEmbedder::new(2).with_default(vector_with_score(0.9));
        let pipeline = MatchingPipeline::new(SplitEmbedder(inner), PipelineOptions::basic());
        let err = pipeline
            .run(&accounts(2), &balance_request("Kasse", ""))
            .unwrap_err();

        assert!(matches!(err, PipelineError::Scoring(_)));
    }
}
