use std::path::{Path, PathBuf};

use crate::constants::DEFAULT_MAX_SEQ_LEN;
use crate::embedding::device::DevicePreference;
use crate::embedding::error::EmbeddingError;
use crate::embedding::profile::ModelProfile;

const CONFIG_FILE: &str = "config.json";
const WEIGHTS_FILE: &str = "model.safetensors";
const TOKENIZER_FILE: &str = "tokenizer.json";

#[derive(Debug, Clone)]
/// Configuration for [`SentenceEncoder`](super::SentenceEncoder).
pub struct EncoderConfig {
    /// Model identity; fixes the expected embedding dimension.
    pub profile: ModelProfile,
    /// Directory with `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens per text.
    pub max_seq_len: usize,
    /// Output embedding dimension.
    pub embedding_dim: usize,
    /// Compute device preference.
    pub device: DevicePreference,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        let profile = ModelProfile::default();
        Self {
            profile,
            model_dir: PathBuf::new(),
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            embedding_dim: profile.embedding_dim(),
            device: DevicePreference::default(),
            testing_stub: false,
        }
    }
}

impl EncoderConfig {
    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(profile: ModelProfile, model_dir: P) -> Self {
        Self {
            profile,
            model_dir: model_dir.into(),
            embedding_dim: profile.embedding_dim(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub(profile: ModelProfile) -> Self {
        Self {
            profile,
            embedding_dim: profile.embedding_dim(),
            testing_stub: true,
            ..Default::default()
        }
    }

    pub fn with_device(mut self, device: DevicePreference) -> Self {
        self.device = device;
        self
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be greater than zero".to_string(),
            });
        }

        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if self.testing_stub {
            return Ok(());
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        Ok(())
    }

    pub fn config_path(&self) -> PathBuf {
        self.model_dir.join(CONFIG_FILE)
    }

    pub fn weights_path(&self) -> PathBuf {
        self.model_dir.join(WEIGHTS_FILE)
    }

    pub fn tokenizer_path(&self) -> PathBuf {
        self.model_dir.join(TOKENIZER_FILE)
    }

    /// Returns the first required model file that is missing, if any.
    pub fn missing_file(&self) -> Option<PathBuf> {
        [
            self.config_path(),
            self.weights_path(),
            self.tokenizer_path(),
        ]
        .into_iter()
        .find(|path| !path.is_file())
    }

    /// Returns `true` if all model files are present.
    pub fn model_available(&self) -> bool {
        !self.model_dir.as_os_str().is_empty() && self.missing_file().is_none()
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }
}
