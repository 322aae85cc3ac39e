//! Mock embedder with caller-chosen vectors.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::Embedder;
use super::error::EmbeddingError;

/// Embedder returning fixed vectors per text, for exercising score thresholds.
///
/// Unknown texts map to the default vector (all zeros unless set).
#[derive(Debug, Default)]
pub struct MockEmbedder {
    dim: usize,
    vectors: HashMap<String, Vec<f32>>,
    default_vector: Option<Vec<f32>>,
    fail_with: Option<String>,
    calls: AtomicUsize,
}

impl MockEmbedder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ..Default::default()
        }
    }

    /// Embedder whose every call fails with an inference error.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            dim: 2,
            fail_with: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dim, "mock vector has wrong dimension");
        self.vectors.insert(text.into(), vector);
        self
    }

    pub fn with_default(mut self, vector: Vec<f32>) -> Self {
        assert_eq!(vector.len(), self.dim, "mock vector has wrong dimension");
        self.default_vector = Some(vector);
        self
    }

    /// Number of `encode` calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for MockEmbedder {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(reason) = &self.fail_with {
            return Err(EmbeddingError::InferenceFailed {
                reason: reason.clone(),
            });
        }

        Ok(texts
            .iter()
            .map(|text| {
                self.vectors
                    .get(*text)
                    .or(self.default_vector.as_ref())
                    .cloned()
                    .unwrap_or_else(|| vec![0.0; self.dim])
            })
            .collect())
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }
}
