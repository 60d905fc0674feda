//! Hybrid vector builder: lexical weight × per-token semantic embedding.
//!
//! For an answer text the builder lowercases, computes TF-IDF weights for the
//! whole text, then walks the whitespace tokens. Every token that is in the
//! vocabulary with a positive weight contributes `weight * encode(token)`; the
//! sum is unit-normalized. Repeated tokens contribute once per occurrence.
//!
//! Tokens are split on whitespace only, while the vectorizer's analyzer strips
//! punctuation, so `"plan."` never matches the vocabulary term `"plan"`. That is
//! how the reference corpus was built and is kept as is.

mod builder;
mod vector;

#[cfg(test)]
mod tests;

pub use builder::{HybridVectorBuilder, normalize_text};
pub use vector::QueryVector;
