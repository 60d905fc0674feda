use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::taxonomy::DiscDimension;

use super::aggregate::ProfileSummary;

/// One exported assessment row.
///
/// Column names match the results sheet the recruiting team already consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    #[serde(rename = "Unique ID")]
    pub id: Uuid,
    #[serde(rename = "Timestamp", with = "timestamp_format")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "DiSC Result")]
    pub primary: DiscDimension,
    #[serde(rename = "D score percentage")]
    pub d_percentage: f32,
    #[serde(rename = "I score percentage")]
    pub i_percentage: f32,
    #[serde(rename = "S score percentage")]
    pub s_percentage: f32,
    #[serde(rename = "C score percentage")]
    pub c_percentage: f32,
}

impl AssessmentRecord {
    /// New record with a fresh id, stamped now.
    pub fn new(summary: &ProfileSummary) -> Self {
        Self::with_identity(summary, Uuid::new_v4(), Utc::now())
    }

    pub fn with_identity(summary: &ProfileSummary, id: Uuid, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            timestamp,
            primary: summary.primary,
            d_percentage: summary.percentage(DiscDimension::D),
            i_percentage: summary.percentage(DiscDimension::I),
            s_percentage: summary.percentage(DiscDimension::S),
            c_percentage: summary.percentage(DiscDimension::C),
        }
    }

    pub fn percentage(&self, dimension: DiscDimension) -> f32 {
        match dimension {
            DiscDimension::D => self.d_percentage,
            DiscDimension::I => self.i_percentage,
            DiscDimension::S => self.s_percentage,
            DiscDimension::C => self.c_percentage,
        }
    }
}

/// `2024-07-31_13-45-00`, safe to embed in export file names.
mod timestamp_format {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .map(|naive| naive.and_utc())
            .map_err(serde::de::Error::custom)
    }
}

pub use timestamp_format::FORMAT as TIMESTAMP_FORMAT;
