use std::path::Path;

use tracing::{info, warn};

use crate::artifact::ArtifactFile;
use crate::taxonomy::{DiscDimension, QuestionId};

use super::entry::ReferenceEntry;
use super::error::CorpusError;

/// Immutable, question-partitioned reference corpus.
#[derive(Debug, Clone)]
pub struct ReferenceCorpus {
    entries: Vec<ReferenceEntry>,
    partitions: [Vec<usize>; QuestionId::COUNT],
    dim: usize,
}

impl ReferenceCorpus {
    /// Loads a corpus artifact whose vectors must all be `expected_dim` long.
    pub fn load<P: AsRef<Path>>(path: P, expected_dim: usize) -> Result<Self, CorpusError> {
        let file = ArtifactFile::open(path)?;
        let entries: Vec<ReferenceEntry> = file.parse_json()?;
        let corpus = Self::from_entries(entries, expected_dim)?;

        info!(
            path = %file.path().display(),
            fingerprint = %file.short_fingerprint(),
            entries = corpus.len(),
            dim = corpus.dim(),
            "Reference corpus loaded"
        );

        Ok(corpus)
    }

    pub fn from_entries(
        entries: Vec<ReferenceEntry>,
        expected_dim: usize,
    ) -> Result<Self, CorpusError> {
        if entries.is_empty() {
            return Err(CorpusError::Empty);
        }

        let mut partitions: [Vec<usize>; QuestionId::COUNT] = Default::default();

        for (index, entry) in entries.iter().enumerate() {
            let actual = entry.hybrid_vector.len();
            if actual != expected_dim {
                return Err(CorpusError::DimensionMismatch {
                    index,
                    expected: expected_dim,
                    actual,
                });
            }
            if entry.hybrid_vector.iter().any(|x| !x.is_finite()) {
                return Err(CorpusError::NonFiniteVector { index });
            }
            partitions[entry.question_id.index()].push(index);
        }

        for question in QuestionId::ALL {
            if partitions[question.index()].is_empty() {
                warn!(question = %question, "No reference entries for question");
            }
        }

        Ok(Self {
            entries,
            partitions,
            dim: expected_dim,
        })
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Vector dimensionality shared by every entry.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Entries for `question`, in artifact order.
    pub fn for_question(&self, question: QuestionId) -> impl Iterator<Item = &ReferenceEntry> + '_ {
        self.partitions[question.index()]
            .iter()
            .map(move |&i| &self.entries[i])
    }

    pub fn question_len(&self, question: QuestionId) -> usize {
        self.partitions[question.index()].len()
    }

    /// Entries per dimension for `question`, in D, I, S, C order.
    pub fn dimension_counts(&self, question: QuestionId) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for entry in self.for_question(question) {
            counts[entry.dimension.index()] += 1;
        }
        counts
    }

    pub fn has_dimension(&self, question: QuestionId, dimension: DiscDimension) -> bool {
        self.dimension_counts(question)[dimension.index()] > 0
    }
}
