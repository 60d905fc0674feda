//! Reference corpus: precomputed hybrid vectors labeled with question and DiSC dimension.
//!
//! Loaded once from a JSON array artifact and read-only afterwards:
//!
//! ```json
//! [
//!   { "question_id": "Q1", "type": "D", "hybrid_vector": [0.12, -0.03, ...], "text": "..." }
//! ]
//! ```
//!
//! Entries keep artifact order; a per-question index list makes filtering by
//! question a slice walk instead of a scan over the whole corpus.

pub mod error;
mod entry;
mod store;


pub use entry::ReferenceEntry;
pub use error::CorpusError;
pub use store::ReferenceCorpus;
