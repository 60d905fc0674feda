//! Table-driven encoder for tests and examples.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::encoder::SemanticEncoder;
use super::error::EmbeddingError;

/// Returns the registered vector for a text, or the zero vector.
#[derive(Debug, Default)]
pub struct MockEncoder {
    dim: usize,
    table: HashMap<String, Vec<f32>>,
    calls: AtomicUsize,
}

impl MockEncoder {
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            ..Default::default()
        }
    }

    pub fn with_token<V: Into<Vec<f32>>>(mut self, text: &str, vector: V) -> Self {
        self.table.insert(text.to_string(), vector.into());
        self
    }

    /// Number of `encode` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl SemanticEncoder for MockEncoder {
    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .table
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![0.0; self.dim]))
    }
}

/// Always fails; used to check error propagation.
#[derive(Debug, Default)]
pub struct FailingEncoder {
    pub dim: usize,
}

impl SemanticEncoder for FailingEncoder {
    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn encode(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::InferenceFailed {
            reason: "mock failure".to_string(),
        })
    }
}
