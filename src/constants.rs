//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary constants from primary ones to avoid drift.
//!
//! # Dimension Invariants
//!
//! The encoder output dimension is shared by the hybrid vector builder, the
//! reference corpus and the ranker. A corpus built with one encoder cannot be
//! scored against query vectors from another, so the dimension is checked once
//! at load time with [`validate_embedding_dim`] instead of per query.

use thiserror::Error;

/// Output dimension of `sentence-transformers/all-MiniLM-L6-v2`.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the encoder for a single text.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Matches returned per answer by the assessment wizard.
pub const DEFAULT_TOP_N: usize = 4;

/// Answers whose best match scores below this are rejected as off-topic.
pub const DEFAULT_RELEVANCE_THRESHOLD: f32 = 0.4;

/// Whitespace-separated words an answer needs before it is scored.
pub const DEFAULT_MIN_ANSWER_WORDS: usize = 15;

/// Token embeddings kept in the encoder cache.
pub const DEFAULT_TOKEN_CACHE_CAPACITY: u64 = 10_000;

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    #[error("embedding dimension cannot be zero")]
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use disc::constants::{validate_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// validate_embedding_dim(384, DEFAULT_EMBEDDING_DIM).unwrap();
/// assert!(validate_embedding_dim(768, DEFAULT_EMBEDDING_DIM).is_err());
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if expected == 0 || actual == 0 {
        return Err(DimValidationError::ZeroDimension);
    }
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
