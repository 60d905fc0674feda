use std::cmp::Ordering;

use tracing::debug;

use crate::corpus::ReferenceCorpus;
use crate::taxonomy::QuestionId;

use super::cosine::cosine_similarity;
use super::types::ScoredReference;

/// Descending by score with NaN last. Total, so ties stay in corpus order.
pub(crate) fn by_score_desc(a: f32, b: f32) -> Ordering {
    a.is_nan()
        .cmp(&b.is_nan())
        .then_with(|| b.partial_cmp(&a).unwrap_or(Ordering::Equal))
}

/// Linear-scan ranker over a shared corpus.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityRanker<'a> {
    corpus: &'a ReferenceCorpus,
}

impl<'a> SimilarityRanker<'a> {
    pub fn new(corpus: &'a ReferenceCorpus) -> Self {
        Self { corpus }
    }

    /// Every entry for `question`, best first. Ties keep corpus order.
    pub fn rank_all(&self, query: &[f32], question: QuestionId) -> Vec<ScoredReference<'a>> {
        let mut scored: Vec<ScoredReference<'a>> = self
            .corpus
            .for_question(question)
            .map(|entry| ScoredReference::new(cosine_similarity(query, &entry.hybrid_vector), entry))
            .collect();

        scored.sort_by(|a, b| by_score_desc(a.score, b.score));

        debug!(
            question = %question,
            candidates = scored.len(),
            top_score = scored.first().map(|s| s.score),
            "Ranked references"
        );

        scored
    }

    /// At most `top_n` best entries for `question`.
    pub fn rank(
        &self,
        query: &[f32],
        question: QuestionId,
        top_n: usize,
    ) -> Vec<ScoredReference<'a>> {
        let mut scored = self.rank_all(query, question);
        scored.truncate(top_n);
        scored
    }

    /// Best score for `question`, or `0.0` when it has no entries.
    pub fn max_similarity(&self, query: &[f32], question: QuestionId) -> f32 {
        self.corpus
            .for_question(question)
            .map(|entry| cosine_similarity(query, &entry.hybrid_vector))
            .reduce(f32::max)
            .unwrap_or(0.0)
    }
}
