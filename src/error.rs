use thiserror::Error;

/// Failures of the weighted selector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectError {
    #[error("cannot select from an empty list")]
    Empty,

    #[error("weights length {weights} does not match items length {items}")]
    LengthMismatch { items: usize, weights: usize },

    #[error("weights must be non-negative and finite with a positive sum")]
    InvalidWeights,
}

/// Errors surfaced by composition and generation.
///
/// Both variants point at a programming or data-authoring mistake; callers
/// are not expected to recover from them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("category '{category}' has an empty '{collection}' list")]
    EmptyCollection {
        category: String,
        collection: String,
    },

    #[error(transparent)]
    Select(#[from] SelectError),
}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
