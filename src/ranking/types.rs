use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::corpus::ReferenceEntry;
use crate::taxonomy::{DiscDimension, QuestionId};

/// A reference entry scored for one query.
///
/// `dimension` starts as the entry's stored tag and is the only field the
/// negation switch rewrites; the borrowed canonical entry is never touched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredReference<'a> {
    pub score: f32,
    pub entry: &'a ReferenceEntry,
    pub dimension: DiscDimension,
}

impl<'a> ScoredReference<'a> {
    pub fn new(score: f32, entry: &'a ReferenceEntry) -> Self {
        Self {
            score,
            entry,
            dimension: entry.dimension,
        }
    }

    pub fn question_id(&self) -> QuestionId {
        self.entry.question_id
    }

    /// `true` when the reported dimension differs from the stored tag.
    pub fn is_switched(&self) -> bool {
        self.dimension != self.entry.dimension
    }
}

impl Serialize for ScoredReference<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScoredReference", 5)?;
        state.serialize_field("score", &self.score)?;
        state.serialize_field("question_id", &self.entry.question_id)?;
        state.serialize_field("type", &self.dimension)?;
        state.serialize_field("stored_type", &self.entry.dimension)?;
        state.serialize_field("text", &self.entry.text)?;
        state.end()
    }
}
