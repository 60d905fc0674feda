use std::sync::Arc;

use super::error::EmbeddingError;

/// A fixed, deterministic text encoder producing vectors of one dimensionality.
///
/// Implementations are shared read-only across concurrent assessment sessions.
pub trait SemanticEncoder: Send + Sync {
    /// Output dimensionality of [`encode`](Self::encode).
    fn embedding_dim(&self) -> usize;

    /// Encodes `text` in isolation.
    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

impl<E: SemanticEncoder + ?Sized> SemanticEncoder for Box<E> {
    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).encode(text)
    }
}

impl<E: SemanticEncoder + ?Sized> SemanticEncoder for Arc<E> {
    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).encode(text)
    }
}
