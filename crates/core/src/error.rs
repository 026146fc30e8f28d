//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic domain failures (validation, bad
/// selector labels). Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. a malformed product record).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A label was not one of the known selector values.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = DomainError::validation("price must be non-negative");
        assert_eq!(err.to_string(), "validation failed: price must be non-negative");

        let err = DomainError::invalid_value("price range: 200+");
        assert_eq!(err.to_string(), "invalid value: price range: 200+");
    }
}
