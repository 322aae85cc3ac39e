use std::fmt;
use std::str::FromStr;

use crate::constants::{FAST_EMBEDDING_DIM, FAST_MODEL_ID, STRONG_EMBEDDING_DIM, STRONG_MODEL_ID};

use super::error::EmbeddingError;

/// Which pretrained sentence encoder to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelProfile {
    /// Light multilingual MiniLM (384-d).
    #[default]
    Fast,
    /// Heavier multilingual mpnet (768-d).
    Strong,
}

impl ModelProfile {
    /// Hugging Face repository id of the model.
    pub fn model_id(&self) -> &'static str {
        match self {
            ModelProfile::Fast => FAST_MODEL_ID,
            ModelProfile::Strong => STRONG_MODEL_ID,
        }
    }

    pub fn embedding_dim(&self) -> usize {
        match self {
            ModelProfile::Fast => FAST_EMBEDDING_DIM,
            ModelProfile::Strong => STRONG_EMBEDDING_DIM,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelProfile::Fast => "fast",
            ModelProfile::Strong => "strong",
        }
    }
}

impl fmt::Display for ModelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelProfile {
    type Err = EmbeddingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" | "light" | "minilm" => Ok(ModelProfile::Fast),
            "strong" | "heavy" | "mpnet" => Ok(ModelProfile::Strong),
            other => Err(EmbeddingError::InvalidConfig {
                reason: format!("unknown model profile '{other}' (expected fast or strong)"),
            }),
        }
    }
}
