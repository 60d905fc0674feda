//! MiniLM sentence encoder (BERT + tokenizer, mean pooling).
//!
//! Use [`MiniLmConfig::stub`] for tests/examples without model files.

/// MiniLM configuration.
pub mod config;
mod model;


pub use config::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, REQUIRED_MODEL_FILES};

use std::sync::Arc;

use candle_core::{Device, Tensor};
use tokenizers::Tokenizer;
use tracing::{debug, info, warn};

use crate::embedding::device::{device_label, select_device};
use crate::embedding::encoder::SemanticEncoder;
use crate::embedding::error::EmbeddingError;
use crate::embedding::utils::load_tokenizer;
use crate::hashing::hash_to_u64;

use model::MeanPooledBert;

enum EncoderBackend {
    Model {
        model: Arc<MeanPooledBert>,
        tokenizer: Arc<Tokenizer>,
        device: Device,
    },
    Stub,
}

/// Sentence encoder backing the hybrid vectors (supports stub mode).
pub struct MiniLmEncoder {
    backend: EncoderBackend,
    config: MiniLmConfig,
}

impl std::fmt::Debug for MiniLmEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MiniLmEncoder")
            .field(
                "backend",
                &match &self.backend {
                    EncoderBackend::Model { device, .. } => format!("Model({})", device_label(device)),
                    EncoderBackend::Stub => "Stub".to_string(),
                },
            )
            .field("embedding_dim", &self.config.embedding_dim)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl MiniLmEncoder {
    /// Loads the encoder from a config (stub mode is supported).
    pub fn load(config: MiniLmConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("MiniLM encoder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EncoderBackend::Stub,
                config,
            });
        }

        let device = select_device();

        let model = MeanPooledBert::load(&config.model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("failed to load BERT weights: {e}"),
            }
        })?;

        let tokenizer = load_tokenizer(&config.model_dir, config.max_seq_len).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: format!("failed to load tokenizer: {e}"),
            }
        })?;

        info!(
            model_dir = %config.model_dir.display(),
            device = device_label(&device),
            embedding_dim = config.embedding_dim,
            max_seq_len = config.max_seq_len,
            "MiniLM encoder loaded"
        );

        Ok(Self {
            backend: EncoderBackend::Model {
                model: Arc::new(model),
                tokenizer: Arc::new(tokenizer),
                device,
            },
            config,
        })
    }

    /// Stub encoder with the default dimension.
    pub fn stub() -> Result<Self, EmbeddingError> {
        Self::load(MiniLmConfig::stub())
    }

    fn encode_with_model(
        &self,
        text: &str,
        model: &MeanPooledBert,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        if encoding.get_ids().is_empty() {
            return Ok(vec![0.0; self.config.embedding_dim]);
        }

        debug!(
            text_len = text.len(),
            token_count = encoding.get_ids().len(),
            "Encoding text (transformer forward pass)"
        );

        let input_ids = Tensor::new(encoding.get_ids(), device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        let pooled = model
            .forward_pooled(&input_ids, &token_type_ids, &attention_mask)
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("transformer forward pass failed: {e}"),
            })?;

        if pooled.len() != self.config.embedding_dim {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.config.embedding_dim,
                actual: pooled.len(),
            });
        }

        Ok(self.finish(pooled))
    }

    fn encode_stub(&self, text: &str) -> Vec<f32> {
        let mut state = hash_to_u64(text.as_bytes());

        let embedding = (0..self.config.embedding_dim)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
                ((state >> 32) as f32 / u32::MAX as f32) * 2.0 - 1.0
            })
            .collect();

        self.finish(embedding)
    }

    fn finish(&self, mut embedding: Vec<f32>) -> Vec<f32> {
        if !self.config.normalize {
            return embedding;
        }

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut embedding {
                *x /= norm;
            }
        }
        embedding
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        matches!(self.backend, EncoderBackend::Stub)
    }

    /// Returns the encoder configuration.
    pub fn config(&self) -> &MiniLmConfig {
        &self.config
    }
}

impl SemanticEncoder for MiniLmEncoder {
    fn embedding_dim(&self) -> usize {
        self.config.embedding_dim
    }

    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EncoderBackend::Model {
                model,
                tokenizer,
                device,
            } => self.encode_with_model(text, model, tokenizer, device),
            EncoderBackend::Stub => {
                debug!(text_len = text.len(), "Generating stub embedding");
                Ok(self.encode_stub(text))
            }
        }
    }
}
