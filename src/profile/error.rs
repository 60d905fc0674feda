use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Every accumulated similarity summed to zero or less.
    #[error("no usable similarity signal (total {total})")]
    NoSignal { total: f32 },
}
