use std::path::PathBuf;

use crate::embedding::error::EmbeddingError;

/// Default MiniLM output dimension.
pub const MINILM_EMBEDDING_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Default MiniLM max sequence length.
pub const MINILM_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

/// Files a sentence-transformers export must provide.
pub const REQUIRED_MODEL_FILES: [&str; 3] = ["config.json", "model.safetensors", "tokenizer.json"];

#[derive(Debug, Clone)]
/// Configuration for [`MiniLmEncoder`](super::MiniLmEncoder).
pub struct MiniLmConfig {
    /// Directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    pub model_dir: PathBuf,
    /// Max tokens to consider.
    pub max_seq_len: usize,
    /// Output embedding dimension.
    pub embedding_dim: usize,
    /// L2-normalize pooled output (the all-MiniLM-L6-v2 pipeline does).
    pub normalize: bool,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for MiniLmConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: MINILM_MAX_SEQ_LEN,
            embedding_dim: MINILM_EMBEDDING_DIM,
            normalize: true,
            testing_stub: false,
        }
    }
}

impl MiniLmConfig {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_DIR: &'static str = "DISC_ENCODER_PATH";

    /// Loads config from the environment. A missing model directory selects stub mode.
    pub fn from_env() -> Self {
        match std::env::var(Self::ENV_MODEL_DIR)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            Some(dir) => Self::new(dir),
            None => Self::stub(),
        }
    }

    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    /// Validates required fields for non-stub mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.embedding_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding_dim must be positive".to_string(),
            });
        }

        if self.max_seq_len < 2 {
            return Err(EmbeddingError::InvalidConfig {
                reason: format!("max_seq_len {} leaves no room for text", self.max_seq_len),
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

        if let Some(missing) = self.missing_files().first() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.join(missing),
            });
        }

        Ok(())
    }

    /// Required files absent from `model_dir`.
    pub fn missing_files(&self) -> Vec<&'static str> {
        REQUIRED_MODEL_FILES
            .into_iter()
            .filter(|name| !self.model_dir.join(name).is_file())
            .collect()
    }

    /// Returns `true` if every required model file exists.
    pub fn model_available(&self) -> bool {
        !self.model_dir.as_os_str().is_empty() && self.missing_files().is_empty()
    }
}
