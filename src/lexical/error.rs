use thiserror::Error;

use crate::artifact::ArtifactError;

#[derive(Debug, Error)]
pub enum LexicalError {
    #[error("vectorizer artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("vectorizer vocabulary is empty")]
    EmptyVocabulary,

    #[error("vocabulary term '{term}' has index {index} but idf has {idf_len} entries")]
    IndexOutOfRange {
        term: String,
        index: usize,
        idf_len: usize,
    },

    #[error("idf[{index}] is not finite: {value}")]
    NonFiniteIdf { index: usize, value: f32 },

    #[error("invalid ngram_range ({min}, {max})")]
    InvalidNgramRange { min: usize, max: usize },
}
