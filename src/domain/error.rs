//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors describe input that cannot be turned into a fixture.
/// These are independent of CLI and configuration concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("level-order sequence starts with a null marker")]
    MissingRoot,

    #[error("value {value} at index {index} has no parent left in the frontier")]
    OrphanValue { index: usize, value: i32 },

    #[error("null marker at index {index} is not allowed in a list literal")]
    UnexpectedMarker { index: usize },

    #[error("invalid literal {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error("invalid parameter declaration: {0}")]
    InvalidParam(String),

    #[error("no `def name(...)` signature found in {0:?}")]
    InvalidSignature(String),

    #[error("example input does not match declared parameters: {input}")]
    ExampleMismatch { input: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
