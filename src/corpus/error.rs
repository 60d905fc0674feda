use thiserror::Error;

use crate::artifact::ArtifactError;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus artifact error: {0}")]
    Artifact(#[from] ArtifactError),

    #[error("reference corpus is empty")]
    Empty,

    #[error("entry {index} has a {actual}-dimensional vector, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("entry {index} has a non-finite vector component")]
    NonFiniteVector { index: usize },
}
