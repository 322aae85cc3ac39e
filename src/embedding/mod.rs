//! Text embedding.
//!
//! - [`Embedder`] is the contract the matching pipeline depends on.
//! - [`encoder`] provides the candle-backed sentence encoder (with a stub mode).
//! - [`ModelProfile`] names the two supported model identities.

/// BERT-family encoder wrapper used by the sentence encoder.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Sentence encoder (mean-pooled BERT embeddings).
pub mod encoder;
mod error;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod profile;
#[cfg(test)]
mod test_fixtures;
/// Tokenizer loading helpers.
pub mod utils;

pub use device::{DevicePreference, select_device};
pub use encoder::{EncoderConfig, SentenceEncoder};
pub use error::EmbeddingError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbedder;
pub use profile::ModelProfile;

use std::sync::Arc;

/// Maps texts to fixed-length vectors.
///
/// Implementations must be order-preserving (one vector per input text) and
/// deterministic for a fixed model. A single loaded instance is shared
/// read-only across requests.
pub trait Embedder: Send + Sync {
    /// Encodes `texts` into one vector each.
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Length of every vector produced by [`encode`](Embedder::encode).
    fn embedding_dim(&self) -> usize;
}

impl<T: Embedder + ?Sized> Embedder for Arc<T> {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).encode(texts)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }
}

impl<T: Embedder + ?Sized> Embedder for &T {
    fn encode(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).encode(texts)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }
}
