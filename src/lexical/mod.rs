//! Lexical weighting model (TF-IDF), fitted offline and fixed at load time.
//!
//! The artifact is the JSON export of a fitted vectorizer: its vocabulary, the
//! per-term idf vector and the handful of options that change `transform`.
//! [`TfidfModel::transform`] reproduces a single-document transform against
//! those fixed statistics; the hybrid builder then reads per-token weights out
//! of the result with [`TfidfModel::weight_of`].
//!
//! ```json
//! {
//!   "vocabulary": { "adapt": 0, "plan": 1, "quickly": 2 },
//!   "idf": [1.69, 1.28, 2.10],
//!   "norm": "l2",
//!   "sublinear_tf": false,
//!   "lowercase": true,
//!   "ngram_range": [1, 1]
//! }
//! ```

mod analyzer;
pub mod error;
mod model;


pub use analyzer::{analyze, word_tokens};
pub use error::LexicalError;
pub use model::{TermWeights, TfidfArtifact, TfidfModel, TfidfNorm};
