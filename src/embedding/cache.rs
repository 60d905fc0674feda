//! Token embedding cache.
//!
//! The hybrid builder encodes every recognized token on its own, and the same
//! handful of words recur across answers. Encoders are deterministic, so a
//! cached vector is always identical to a fresh one.

use std::sync::Arc;

use moka::sync::Cache;
use tracing::trace;

use super::encoder::SemanticEncoder;
use super::error::EmbeddingError;

/// Wraps an encoder with a bounded in-memory cache keyed by input text.
pub struct CachedEncoder<E> {
    inner: E,
    cache: Option<Cache<String, Arc<Vec<f32>>>>,
}

impl<E: std::fmt::Debug> std::fmt::Debug for CachedEncoder<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedEncoder")
            .field("inner", &self.inner)
            .field("capacity", &self.cache.as_ref().and_then(|c| c.policy().max_capacity()))
            .finish()
    }
}

impl<E: SemanticEncoder> CachedEncoder<E> {
    /// `capacity == 0` disables caching.
    pub fn new(inner: E, capacity: u64) -> Self {
        let cache = (capacity > 0).then(|| Cache::new(capacity));
        Self { inner, cache }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Approximate number of cached entries.
    pub fn cached_entries(&self) -> u64 {
        match &self.cache {
            Some(cache) => {
                cache.run_pending_tasks();
                cache.entry_count()
            }
            None => 0,
        }
    }
}

impl<E: SemanticEncoder> SemanticEncoder for CachedEncoder<E> {
    fn embedding_dim(&self) -> usize {
        self.inner.embedding_dim()
    }

    fn encode(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let Some(cache) = &self.cache else {
            return self.inner.encode(text);
        };

        if let Some(hit) = cache.get(text) {
            trace!(text_len = text.len(), "Token embedding cache hit");
            return Ok(hit.as_ref().clone());
        }

        let embedding = self.inner.encode(text)?;
        cache.insert(text.to_string(), Arc::new(embedding.clone()));
        Ok(embedding)
    }
}
