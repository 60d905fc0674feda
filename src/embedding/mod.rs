//! Semantic encoder and model utilities.
//!
//! - [`SemanticEncoder`] is the seam the hybrid builder encodes tokens through.
//! - [`minilm`] provides the pretrained sentence encoder (or a deterministic stub).
//! - [`CachedEncoder`] memoizes token embeddings.

mod cache;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod encoder;
mod error;
/// MiniLM sentence encoder.
pub mod minilm;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
/// Tokenizer loading helpers.
pub mod utils;

pub use cache::CachedEncoder;
pub use encoder::SemanticEncoder;
pub use error::EmbeddingError;
pub use minilm::{MINILM_EMBEDDING_DIM, MINILM_MAX_SEQ_LEN, MiniLmConfig, MiniLmEncoder};
#[cfg(any(test, feature = "mock"))]
pub use mock::{FailingEncoder, MockEncoder};
