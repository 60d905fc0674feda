//! Closed vocabularies of the assessment: the six questions and the four DiSC dimensions.
//!
//! Both are plain enums so that corpus partitioning and the negation swap tables are
//! checked exhaustively by the compiler. Raw string codes only appear at the artifact
//! and CLI boundaries, where [`QuestionId::parse_code`] and [`str::parse`] convert them.

mod dimension;
mod error;
mod question;


pub use dimension::DiscDimension;
pub use error::TaxonomyError;
pub use question::QuestionId;
