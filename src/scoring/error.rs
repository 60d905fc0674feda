use thiserror::Error;

use crate::config::ConfigError;
use crate::constants::DimValidationError;
use crate::corpus::CorpusError;
use crate::embedding::EmbeddingError;
use crate::lexical::LexicalError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("vectorizer error: {0}")]
    Lexical(#[from] LexicalError),

    #[error("encoder error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("reference corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("encoder and corpus disagree: {0}")]
    Dimension(#[from] DimValidationError),
}
