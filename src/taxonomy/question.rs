use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TaxonomyError;

/// One of the six fixed assessment questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestionId {
    Q1,
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
}

impl QuestionId {
    /// Wizard order.
    pub const ALL: [QuestionId; 6] = [
        QuestionId::Q1,
        QuestionId::Q2,
        QuestionId::Q3,
        QuestionId::Q4,
        QuestionId::Q5,
        QuestionId::Q6,
    ];

    /// Number of questions.
    pub const COUNT: usize = Self::ALL.len();

    /// Symbolic code used in artifacts (`"Q1"`..`"Q6"`).
    pub const fn code(self) -> &'static str {
        match self {
            QuestionId::Q1 => "Q1",
            QuestionId::Q2 => "Q2",
            QuestionId::Q3 => "Q3",
            QuestionId::Q4 => "Q4",
            QuestionId::Q5 => "Q5",
            QuestionId::Q6 => "Q6",
        }
    }

    /// Zero-based position, usable as an array index.
    pub const fn index(self) -> usize {
        match self {
            QuestionId::Q1 => 0,
            QuestionId::Q2 => 1,
            QuestionId::Q3 => 2,
            QuestionId::Q4 => 3,
            QuestionId::Q5 => 4,
            QuestionId::Q6 => 5,
        }
    }

    /// Question text shown to the candidate.
    pub const fn prompt(self) -> &'static str {
        match self {
            QuestionId::Q1 => {
                "How do you handle a situation where you need to change your plan \u{2014} adapt quickly or proceed carefully?"
            }
            QuestionId::Q2 => {
                "How do you approach deadlines and managing your time \u{2014} get things done quickly or plan thoughtfully?"
            }
            QuestionId::Q3 => {
                "When faced with conflict, do you prefer to resolve it directly through clear discussion, or focus on maintaining harmony and preserving relationships?"
            }
            QuestionId::Q4 => {
                "When presented with a new idea, do you consider its impact on people, question its validity, or welcome it with optimism?"
            }
            QuestionId::Q5 => {
                "When you have a new task, do you jump in quickly to get started, or take time to understand it fully, gather information, and create a plan?"
            }
            QuestionId::Q6 => {
                "When making a decision, do you focus on goals, rely on your judgment, or consider others' perspectives?"
            }
        }
    }

    /// Lenient boundary parse: exact code match only, `None` for anything else.
    pub fn parse_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.code() == code)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for QuestionId {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_code(s.trim()).ok_or_else(|| TaxonomyError::UnknownQuestion {
            code: s.to_string(),
        })
    }
}
