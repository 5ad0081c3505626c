//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Two kinds only. Both are returned synchronously to the immediate caller;
/// nothing in the domain layer retries or logs them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed input (empty title, zero count or capacity). Always a caller bug.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A state-dependent precondition failed (not enough stock, capacity
    /// exceeded, unknown good, mismatched merge).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_kind_and_message() {
        let err = DomainError::invalid_operation("capacity exceeded");
        assert_eq!(err.to_string(), "invalid operation: capacity exceeded");

        let err = DomainError::invalid_argument("count must be positive");
        assert_eq!(err.to_string(), "invalid argument: count must be positive");
    }

    #[test]
    fn kind_predicates() {
        assert!(DomainError::invalid_argument("x").is_invalid_argument());
        assert!(!DomainError::invalid_argument("x").is_invalid_operation());
        assert!(DomainError::invalid_operation("x").is_invalid_operation());
    }
}
