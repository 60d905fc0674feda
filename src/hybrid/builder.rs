use tracing::debug;

use crate::embedding::{EmbeddingError, SemanticEncoder};
use crate::lexical::TfidfModel;

use super::vector::QueryVector;

/// Text cleanup applied before weighting and tokenizing.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
}

/// Builds query vectors against a fixed model and encoder.
#[derive(Clone, Copy)]
pub struct HybridVectorBuilder<'a> {
    model: &'a TfidfModel,
    encoder: &'a dyn SemanticEncoder,
}

impl<'a> HybridVectorBuilder<'a> {
    pub fn new(model: &'a TfidfModel, encoder: &'a dyn SemanticEncoder) -> Self {
        Self { model, encoder }
    }

    pub fn embedding_dim(&self) -> usize {
        self.encoder.embedding_dim()
    }

    /// Builds the hybrid vector for `text`.
    ///
    /// Empty or fully out-of-vocabulary text yields the zero vector; only an
    /// encoder failure is an error.
    pub fn build(&self, text: &str) -> Result<QueryVector, EmbeddingError> {
        let dim = self.encoder.embedding_dim();
        let clean = normalize_text(text);
        let weights = self.model.transform(&clean);

        let mut sum = vec![0.0f32; dim];
        let mut contributing = 0usize;

        for token in clean.split_whitespace() {
            let Some(weight) = self.model.weight_of(&weights, token) else {
                continue;
            };
            if weight <= 0.0 {
                continue;
            }

            let embedding = self.encoder.encode(token)?;
            if embedding.len() != dim {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: dim,
                    actual: embedding.len(),
                });
            }
            if embedding.iter().any(|x| !x.is_finite()) {
                return Err(EmbeddingError::InferenceFailed {
                    reason: format!("non-finite embedding for token '{token}'"),
                });
            }

            for (acc, value) in sum.iter_mut().zip(&embedding) {
                *acc += weight * value;
            }
            contributing += 1;
        }

        debug!(
            text_len = text.len(),
            weighted_terms = weights.len(),
            contributing_tokens = contributing,
            "Built hybrid vector"
        );

        if contributing == 0 {
            return Ok(QueryVector::zeros(dim));
        }

        let norm = sum.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for x in &mut sum {
                *x /= norm;
            }
        }

        Ok(QueryVector::from(sum))
    }
}
