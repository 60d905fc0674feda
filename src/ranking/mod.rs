//! Cosine-similarity ranking of a query vector against one question's references.

mod cosine;
mod ranker;
mod types;

#[cfg(test)]
mod tests;

pub use cosine::cosine_similarity;
pub use ranker::SimilarityRanker;
pub use types::ScoredReference;
