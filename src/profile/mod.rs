//! Aggregation of accepted answers into a DiSC profile.
//!
//! Each accepted answer contributes the similarity of its top matches to the
//! dimension each match reports (after the negation switch). Percentages are
//! shares of the grand total across all four dimensions.

mod aggregate;
mod error;
mod record;


pub use aggregate::{DiscProfile, ProfileSummary};
pub use error::ProfileError;
pub use record::{AssessmentRecord, TIMESTAMP_FORMAT};
