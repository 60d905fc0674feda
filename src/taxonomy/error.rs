use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    #[error("unknown question identifier '{code}' (expected Q1..Q6)")]
    UnknownQuestion { code: String },

    #[error("unknown DiSC dimension '{code}' (expected D, I, S or C)")]
    UnknownDimension { code: String },
}
