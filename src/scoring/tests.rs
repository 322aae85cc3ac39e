use super::*;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_cosine_identical_vectors() {
    let v = [1.0, 2.0, 3.0];
    assert_close(cosine_similarity(&v, &v), 1.0);
}

#[test]
fn test_cosine_orthogonal_vectors() {
    assert_close(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
}

#[test]
fn test_cosine_opposite_vectors() {
    assert_close(cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]), -1.0);
}

#[test]
fn test_cosine_ignores_magnitude() {
    assert_close(cosine_similarity(&[1.0, 1.0], &[5.0, 5.0]), 1.0);
}

#[test]
fn test_cosine_zero_vector() {
    assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
}

#[test]
fn test_score_all_length_and_range() {
    let scorer = SimilarityScorer::new();
    let query = vec![0.6, 0.8];
    let candidates = vec![
        vec![0.6, 0.8],
        vec![1.0, 0.0],
        vec![-0.6, -0.8],
        vec![0.0, 3.0],
    ];

    let scores = scorer.score_all(&query, &candidates).unwrap();

    assert_eq!(scores.len(), candidates.len());
    assert!(scores.iter().all(|s| (-1.0..=1.0).contains(s)));
    assert_close(scores[0], 1.0);
    assert_close(scores[1], 0.6);
    assert_close(scores[2], -1.0);
    assert_close(scores[3], 0.8);
}

#[test]
fn test_score_all_empty_candidates() {
    let scorer = SimilarityScorer::new();
    assert!(scorer.score_all(&[1.0, 0.0], &[]).unwrap().is_empty());
}

#[test]
fn test_score_all_dimension_mismatch() {
    let scorer = SimilarityScorer::new();
    let err = scorer
        .score_all(&[1.0, 0.0], &[vec![1.0, 0.0], vec![1.0, 0.0, 0.0]])
        .unwrap_err();
    assert_eq!(
        err,
        ScoringError::DimensionMismatch {
            index: 1,
            expected: 2,
            actual: 3,
        }
    );
}

#[test]
fn test_score_all_empty_query() {
    let scorer = SimilarityScorer::new();
    let err = scorer.score_all(&[], &[vec![1.0]]).unwrap_err();
    assert_eq!(err, ScoringError::EmptyQuery);
}

#[test]
fn test_score_all_rejects_nan_candidate() {
    let scorer = SimilarityScorer::new();
    let err = scorer
        .score_all(&[1.0, 0.0], &[vec![1.0, 0.0], vec![f32::NAN, 0.5]])
        .unwrap_err();
    assert_eq!(err, ScoringError::NonFiniteScore { index: 1 });
}

#[test]
fn test_score_all_rejects_nan_query() {
    let scorer = SimilarityScorer::new();
    let err = scorer
        .score_all(&[f32::NAN, 1.0], &[vec![1.0, 0.0]])
        .unwrap_err();
    assert_eq!(err, ScoringError::NonFiniteScore { index: 0 });
}

#[test]
fn test_score_all_rejects_infinite_component() {
    let scorer = SimilarityScorer::new();
    let err = scorer
        .score_all(&[1.0, 0.0], &[vec![f32::INFINITY, 0.0]])
        .unwrap_err();
    assert_eq!(err, ScoringError::NonFiniteScore { index: 0 });
}
