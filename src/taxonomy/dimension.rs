use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::TaxonomyError;

/// DiSC personality dimension attached to every reference snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiscDimension {
    /// Dominance.
    D,
    /// Influence.
    I,
    /// Steadiness.
    S,
    /// Conscientiousness.
    C,
}

impl DiscDimension {
    /// Canonical D, I, S, C order. Profile tie-breaks follow it.
    pub const ALL: [DiscDimension; 4] = [
        DiscDimension::D,
        DiscDimension::I,
        DiscDimension::S,
        DiscDimension::C,
    ];

    pub const fn code(self) -> &'static str {
        match self {
            DiscDimension::D => "D",
            DiscDimension::I => "I",
            DiscDimension::S => "S",
            DiscDimension::C => "C",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            DiscDimension::D => "Dominance",
            DiscDimension::I => "Influence",
            DiscDimension::S => "Steadiness",
            DiscDimension::C => "Conscientiousness",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            DiscDimension::D => 0,
            DiscDimension::I => 1,
            DiscDimension::S => 2,
            DiscDimension::C => 3,
        }
    }
}

impl fmt::Display for DiscDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DiscDimension {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.code() == s.trim())
            .ok_or_else(|| TaxonomyError::UnknownDimension {
                code: s.to_string(),
            })
    }
}
