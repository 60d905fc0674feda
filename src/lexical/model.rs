use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::artifact::ArtifactFile;

use super::analyzer::analyze;
use super::error::LexicalError;

/// Row normalization applied after idf weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TfidfNorm {
    L1,
    L2,
}

fn default_norm() -> Option<TfidfNorm> {
    Some(TfidfNorm::L2)
}

fn default_lowercase() -> bool {
    true
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

/// On-disk form of a fitted vectorizer. `norm: null` disables normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f32>,
    #[serde(default = "default_norm")]
    pub norm: Option<TfidfNorm>,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
}

/// Sparse term-index → weight map for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeights(HashMap<usize, f32>);

impl TermWeights {
    /// Weight at `index`, zero when the term did not occur.
    pub fn get(&self, index: usize) -> f32 {
        self.0.get(&index).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        self.0.iter().map(|(&i, &w)| (i, w))
    }
}

/// Immutable TF-IDF model shared read-only by every query.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    norm: Option<TfidfNorm>,
    sublinear_tf: bool,
    lowercase: bool,
    ngram_range: (usize, usize),
}

impl TfidfModel {
    /// Loads and validates a vectorizer artifact.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LexicalError> {
        let file = ArtifactFile::open(path)?;
        let artifact: TfidfArtifact = file.parse_json()?;
        let model = Self::from_artifact(artifact)?;

        info!(
            path = %file.path().display(),
            fingerprint = %file.short_fingerprint(),
            vocabulary = model.vocabulary_len(),
            sublinear_tf = model.sublinear_tf,
            "Vectorizer loaded"
        );

        Ok(model)
    }

    pub fn from_artifact(artifact: TfidfArtifact) -> Result<Self, LexicalError> {
        let TfidfArtifact {
            vocabulary,
            idf,
            norm,
            sublinear_tf,
            lowercase,
            ngram_range,
        } = artifact;

        if vocabulary.is_empty() {
            return Err(LexicalError::EmptyVocabulary);
        }

        let (min_n, max_n) = ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(LexicalError::InvalidNgramRange {
                min: min_n,
                max: max_n,
            });
        }

        if let Some((term, &index)) = vocabulary.iter().find(|(_, idx)| **idx >= idf.len()) {
            return Err(LexicalError::IndexOutOfRange {
                term: term.clone(),
                index,
                idf_len: idf.len(),
            });
        }

        if let Some((index, &value)) = idf.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(LexicalError::NonFiniteIdf { index, value });
        }

        Ok(Self {
            vocabulary,
            idf,
            norm,
            sublinear_tf,
            lowercase,
            ngram_range,
        })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Vocabulary index for an exact term.
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, index: usize) -> Option<f32> {
        self.idf.get(index).copied()
    }

    /// Single-document transform against the fitted statistics.
    pub fn transform(&self, document: &str) -> TermWeights {
        let document = if self.lowercase {
            document.to_lowercase()
        } else {
            document.to_string()
        };

        let (min_n, max_n) = self.ngram_range;
        let mut weights: HashMap<usize, f32> = HashMap::new();
        for term in analyze(&document, min_n, max_n) {
            if let Some(&index) = self.vocabulary.get(&term) {
                *weights.entry(index).or_insert(0.0) += 1.0;
            }
        }

        for (&index, weight) in weights.iter_mut() {
            if self.sublinear_tf {
                *weight = 1.0 + weight.ln();
            }
            *weight *= self.idf[index];
        }

        let norm = match self.norm {
            Some(TfidfNorm::L2) => weights.values().map(|w| w * w).sum::<f32>().sqrt(),
            Some(TfidfNorm::L1) => weights.values().map(|w| w.abs()).sum::<f32>(),
            None => 1.0,
        };
        if norm > 0.0 && norm != 1.0 {
            for weight in weights.values_mut() {
                *weight /= norm;
            }
        }

        TermWeights(weights)
    }

    /// Weight of an exact `term` within an already transformed document.
    pub fn weight_of(&self, weights: &TermWeights, term: &str) -> Option<f32> {
        self.index_of(term).map(|index| weights.get(index))
    }
}
