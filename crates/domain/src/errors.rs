//! Error types for the domain layer.

use thiserror::Error;

use crate::todo::TodoIdentifier;

// =============================================================================
// ValidationError
// =============================================================================

/// Validation failures raised while building domain values from raw input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty.
    #[error("'{field}' must not be empty")]
    EmptyValue { field: String },

    /// A value could not be parsed into the expected shape.
    #[error("'{field}' has invalid format: expected {expected}")]
    InvalidFormat { field: String, expected: String },
}

impl ValidationError {
    #[must_use]
    pub fn empty_value(field: impl Into<String>) -> Self {
        Self::EmptyValue {
            field: field.into(),
        }
    }

    #[must_use]
    pub fn invalid_format(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidFormat {
            field: field.into(),
            expected: expected.into(),
        }
    }

    /// Returns the name of the offending field.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::EmptyValue { field } | Self::InvalidFormat { field, .. } => field,
        }
    }
}

// =============================================================================
// DomainError
// =============================================================================

/// Errors produced by the pure collection helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("todo with ID {0} not found")]
    TodoNotFound(TodoIdentifier),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DomainError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::TodoNotFound(_))
    }
}

// =============================================================================
// Tests
// =============================================================================
