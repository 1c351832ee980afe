//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, recoverable catalog failures. Every
/// variant is surfaced to the user at the presentation boundary; none is
/// fatal to the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An operation referenced an identifier the catalog does not hold.
    #[error("product not found in catalog")]
    NotFound,

    /// A value failed validation (negative price or quantity, malformed
    /// numeric or identifier input, empty name, bad expiry date).
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// An add used an identifier that is already present.
    #[error("product id {0} already exists")]
    DuplicateKey(ProductId),
}

impl DomainError {
    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }

    pub fn duplicate_key(id: ProductId) -> Self {
        Self::DuplicateKey(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_message_names_the_id() {
        let id: ProductId = "06".parse().unwrap();
        let err = DomainError::duplicate_key(id);
        assert_eq!(err.to_string(), "product id 06 already exists");
    }

    #[test]
    fn invalid_value_message_carries_the_reason() {
        let err = DomainError::invalid_value("price cannot be negative");
        assert_eq!(err.to_string(), "invalid value: price cannot be negative");
    }
}
