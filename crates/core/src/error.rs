//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Deterministic, business-level failures only (bad arguments, broken
/// construction invariants, missing lookups).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument failed validation at the point it was supplied.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A construction invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        assert_eq!(
            DomainError::validation("price must be positive").to_string(),
            "validation failed: price must be positive"
        );
        assert_eq!(
            DomainError::invariant("name and valid price are required").to_string(),
            "invariant violated: name and valid price are required"
        );
        assert_eq!(DomainError::not_found().to_string(), "not found");
    }
}
