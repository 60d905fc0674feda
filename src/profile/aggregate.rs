use serde::Serialize;
use tracing::debug;

use crate::ranking::ScoredReference;
use crate::scoring::AnswerEvaluation;
use crate::taxonomy::{DiscDimension, QuestionId};

use super::error::ProfileError;

/// Running per-dimension similarity totals across answered questions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscProfile {
    totals: [f32; DiscDimension::ALL.len()],
    answered: [bool; QuestionId::COUNT],
}

impl DiscProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the scores of `matches` under their reported (post-switch) dimension.
    pub fn add_matches(&mut self, question: QuestionId, matches: &[ScoredReference<'_>]) {
        for scored in matches {
            self.totals[scored.dimension.index()] += scored.score;
        }
        self.answered[question.index()] = true;
    }

    /// Adds an evaluated answer. Rejected answers contribute nothing.
    pub fn add_evaluation(&mut self, evaluation: &AnswerEvaluation<'_>) {
        if evaluation.is_accepted() {
            self.add_matches(evaluation.question, &evaluation.matches);
        }
    }

    pub fn total(&self, dimension: DiscDimension) -> f32 {
        self.totals[dimension.index()]
    }

    pub fn grand_total(&self) -> f32 {
        self.totals.iter().sum()
    }

    pub fn is_answered(&self, question: QuestionId) -> bool {
        self.answered[question.index()]
    }

    /// Questions with no accepted answer yet, in wizard order.
    pub fn missing_questions(&self) -> Vec<QuestionId> {
        QuestionId::ALL
            .into_iter()
            .filter(|q| !self.is_answered(*q))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.answered.iter().all(|a| *a)
    }

    /// Percentages and primary style.
    ///
    /// The primary style is the first maximum in D, I, S, C order.
    pub fn summarize(&self) -> Result<ProfileSummary, ProfileError> {
        let total = self.grand_total();
        if total.is_nan() || total <= 0.0 {
            return Err(ProfileError::NoSignal { total });
        }

        let mut primary = DiscDimension::D;
        for dimension in DiscDimension::ALL {
            if self.total(dimension) > self.total(primary) {
                primary = dimension;
            }
        }

        let percentages = self.totals.map(|t| t / total * 100.0);

        debug!(
            primary = %primary,
            total,
            answered = self.answered.iter().filter(|a| **a).count(),
            "Profile summarized"
        );

        Ok(ProfileSummary {
            primary,
            totals: self.totals,
            percentages,
        })
    }
}

/// Final per-dimension breakdown of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub primary: DiscDimension,
    /// Raw sums indexed by [`DiscDimension::index`].
    pub totals: [f32; 4],
    /// Shares of the grand total, summing to 100.
    pub percentages: [f32; 4],
}

impl ProfileSummary {
    pub fn percentage(&self, dimension: DiscDimension) -> f32 {
        self.percentages[dimension.index()]
    }
}
