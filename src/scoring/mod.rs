//! Answer scoring over loaded artifacts.
//!
//! [`DiscScorer`] owns the vectorizer, encoder and reference corpus and exposes
//! the two query operations used by the assessment wizard:
//! [`get_max_similarity`](DiscScorer::get_max_similarity) and
//! [`retrieve_top_n`](DiscScorer::retrieve_top_n).
//!
//! [`DiscScorer::evaluate_answer`] adds the wizard's acceptance rules
//! ([`AnswerGate`]): an answer needs enough words, and its best match must
//! reach the relevance threshold, before its top matches count toward a
//! profile.
//!
//! Artifacts are loaded once and never mutated. Scoring is `&self` and can run
//! from several threads.

pub mod error;
pub mod gate;
pub mod scorer;


pub use error::ScoringError;
pub use gate::{AnswerGate, AnswerVerdict, word_count};
pub use scorer::{AnswerEvaluation, DiscScorer};
