use serde::Serialize;

use crate::config::Config;
use crate::constants::{DEFAULT_MIN_ANSWER_WORDS, DEFAULT_RELEVANCE_THRESHOLD, DEFAULT_TOP_N};

/// Whitespace-separated word count used by the length check.
pub fn word_count(answer: &str) -> usize {
    answer.split_whitespace().count()
}

/// Acceptance rules applied to each answer before it is scored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerGate {
    /// Answers with fewer words are not scored.
    pub min_words: usize,
    /// Best-match score below this marks the answer off-topic.
    pub relevance_threshold: f32,
    /// Matches kept for an accepted answer.
    pub top_n: usize,
}

impl Default for AnswerGate {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_ANSWER_WORDS,
            relevance_threshold: DEFAULT_RELEVANCE_THRESHOLD,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnswerGate {
    pub fn from_config(config: &Config) -> Self {
        Self {
            min_words: config.min_answer_words,
            relevance_threshold: config.relevance_threshold,
            top_n: config.top_n,
        }
    }

    /// Length check alone. `None` means the answer is long enough.
    pub fn check_length(&self, answer: &str) -> Option<AnswerVerdict> {
        let words = word_count(answer);
        (words < self.min_words).then_some(AnswerVerdict::TooShort {
            words,
            required: self.min_words,
        })
    }

    /// Relevance check on an already computed best score.
    pub fn judge(&self, max_similarity: f32) -> AnswerVerdict {
        if max_similarity < self.relevance_threshold {
            AnswerVerdict::NotRelevant {
                top_score: max_similarity,
            }
        } else {
            AnswerVerdict::Accepted {
                score: max_similarity,
            }
        }
    }
}

/// Outcome of gating one answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnswerVerdict {
    /// Long enough and on-topic.
    Accepted {
        /// Best similarity for the question.
        score: f32,
    },
    /// Fewer words than required; never scored.
    TooShort { words: usize, required: usize },
    /// Best similarity fell under the threshold.
    NotRelevant { top_score: f32 },
}

impl AnswerVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, AnswerVerdict::Accepted { .. })
    }

    /// Best similarity, if the answer got that far.
    pub fn score(&self) -> Option<f32> {
        match self {
            AnswerVerdict::Accepted { score }
            | AnswerVerdict::NotRelevant { top_score: score } => Some(*score),
            AnswerVerdict::TooShort { .. } => None,
        }
    }

    /// Returns a short debug string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            AnswerVerdict::Accepted { .. } => "ACCEPTED",
            AnswerVerdict::TooShort { .. } => "TOO_SHORT",
            AnswerVerdict::NotRelevant { .. } => "NOT_RELEVANT",
        }
    }
}

impl std::fmt::Display for AnswerVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerVerdict::Accepted { score } => write!(f, "ACCEPTED (score: {:.4})", score),
            AnswerVerdict::TooShort { words, required } => {
                write!(f, "TOO_SHORT ({} of {} words)", words, required)
            }
            AnswerVerdict::NotRelevant { top_score } => {
                write!(f, "NOT_RELEVANT (top_score: {:.4})", top_score)
            }
        }
    }
}
