use serde::{Deserialize, Serialize};

use crate::taxonomy::{DiscDimension, QuestionId};

/// One labeled reference snippet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceEntry {
    pub question_id: QuestionId,
    #[serde(rename = "type")]
    pub dimension: DiscDimension,
    pub hybrid_vector: Vec<f32>,
    /// Source snippet, when the export kept it.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "chunk")]
    pub text: Option<String>,
}

impl ReferenceEntry {
    pub fn new(question_id: QuestionId, dimension: DiscDimension, hybrid_vector: Vec<f32>) -> Self {
        Self {
            question_id,
            dimension,
            hybrid_vector,
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}
