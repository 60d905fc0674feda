//! Negation-aware relabeling of the best match.
//!
//! A negated answer ("I would not jump in quickly") tends to land closest to
//! the reference it denies. When the answer contains a negation marker, the
//! top match keeps its similarity but reports the opposite dimension for that
//! question group:
//!
//! | Questions   | Swap set | Pairs          |
//! |-------------|----------|----------------|
//! | Q1, Q2, Q5  | A        | I ↔ S, D ↔ C   |
//! | Q3, Q4, Q6  | B        | I ↔ D, S ↔ C   |
//!
//! Detection lowercases and splits on whitespace only. Punctuation stays on the
//! token, so `"not,"` or `"never."` are not detected and the apostrophe form
//! `"don't"` never matches `"dont"`. Reference labels were tuned against this
//! behaviour, so it is kept.


use tracing::debug;

use crate::ranking::ScoredReference;
use crate::taxonomy::{DiscDimension, QuestionId};

/// Closed set of negation tokens (apostrophe-free contractions).
pub const NEGATION_MARKERS: [&str; 11] = [
    "not", "no", "nor", "dont", "didnt", "cant", "wont", "shouldnt", "wouldnt", "cannot", "never",
];

/// `true` when any whitespace token of the lowercased text is a negation marker.
pub fn contains_negation(text: &str) -> bool {
    text.to_lowercase()
        .split_whitespace()
        .any(|token| NEGATION_MARKERS.contains(&token))
}

/// Dimension swap table, selected by question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapSet {
    /// I ↔ S, D ↔ C.
    A,
    /// I ↔ D, S ↔ C.
    B,
}

impl SwapSet {
    pub const fn for_question(question: QuestionId) -> Self {
        match question {
            QuestionId::Q1 | QuestionId::Q2 | QuestionId::Q5 => SwapSet::A,
            QuestionId::Q3 | QuestionId::Q4 | QuestionId::Q6 => SwapSet::B,
        }
    }

    /// Opposite dimension. An involution without fixed points.
    pub const fn swap(self, dimension: DiscDimension) -> DiscDimension {
        use DiscDimension::{C, D, I, S};

        match (self, dimension) {
            (SwapSet::A, I) => S,
            (SwapSet::A, S) => I,
            (SwapSet::A, D) => C,
            (SwapSet::A, C) => D,
            (SwapSet::B, I) => D,
            (SwapSet::B, D) => I,
            (SwapSet::B, S) => C,
            (SwapSet::B, C) => S,
        }
    }
}

/// Relabels `ranked[0]` when `answer` is negated. Returns whether it did.
///
/// Only the per-call `dimension` of the top result changes; scores and every
/// other result pass through untouched.
pub fn apply_negation_switch(
    ranked: &mut [ScoredReference<'_>],
    question: QuestionId,
    answer: &str,
) -> bool {
    let Some(top) = ranked.first_mut() else {
        return false;
    };

    if !contains_negation(answer) {
        return false;
    }

    let swap_set = SwapSet::for_question(question);
    let switched = swap_set.swap(top.dimension);

    debug!(
        question = %question,
        swap_set = ?swap_set,
        from = %top.dimension,
        to = %switched,
        "Negation detected, switching top dimension"
    );

    top.dimension = switched;
    true
}
