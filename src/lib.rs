//! Hybrid TF-IDF × sentence-embedding retrieval for DiSC assessment answers.
//!
//! A free-text answer is turned into a query vector by weighting the sentence
//! embedding of each recognized token by its TF-IDF weight, then compared by
//! cosine similarity against labeled reference snippets for the same question.
//! The best matches (after negation-aware relabeling) indicate which DiSC
//! dimension the answer leans toward.
//!
//! # Public API Surface
//!
//! ## Query
//! - [`DiscScorer`] - loads artifacts once, answers
//!   [`get_max_similarity`](DiscScorer::get_max_similarity) and
//!   [`retrieve_top_n`](DiscScorer::retrieve_top_n)
//! - [`AnswerGate`], [`AnswerVerdict`] - length and relevance acceptance
//! - [`DiscProfile`], [`AssessmentRecord`] - aggregation into a final profile
//!
//! ## Building blocks
//! - [`TfidfModel`] - fitted lexical weighting model
//! - [`SemanticEncoder`], [`MiniLmEncoder`], [`CachedEncoder`] - token embeddings
//! - [`HybridVectorBuilder`] - query vector construction
//! - [`ReferenceCorpus`], [`SimilarityRanker`] - labeled references and ranking
//! - [`apply_negation_switch`] - top-match relabeling
//!
//! ## Test/Mock Support
//! Mock encoders are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod artifact;
pub mod config;
pub mod constants;
pub mod corpus;
pub mod embedding;
pub mod hashing;
pub mod hybrid;
pub mod lexical;
pub mod negation;
pub mod profile;
pub mod ranking;
pub mod scoring;
pub mod taxonomy;

pub use artifact::{ArtifactError, ArtifactFile};
pub use config::{Config, ConfigError};
pub use constants::{DimValidationError, validate_embedding_dim};
pub use corpus::{CorpusError, ReferenceCorpus, ReferenceEntry};
#[cfg(any(test, feature = "mock"))]
pub use embedding::{FailingEncoder, MockEncoder};
pub use embedding::{
    CachedEncoder, EmbeddingError, MINILM_EMBEDDING_DIM, MiniLmConfig, MiniLmEncoder,
    SemanticEncoder,
};
pub use hybrid::{HybridVectorBuilder, QueryVector};
pub use lexical::{LexicalError, TfidfModel};
pub use negation::{NEGATION_MARKERS, SwapSet, apply_negation_switch, contains_negation};
pub use profile::{AssessmentRecord, DiscProfile, ProfileError, ProfileSummary};
pub use ranking::{ScoredReference, SimilarityRanker, cosine_similarity};
pub use scoring::{AnswerEvaluation, AnswerGate, AnswerVerdict, DiscScorer, ScoringError};
pub use taxonomy::{DiscDimension, QuestionId, TaxonomyError};
