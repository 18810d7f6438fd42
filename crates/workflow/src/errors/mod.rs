//! Error types for the workflow layer.
//!
//! Every failure that reaches a caller of [`TodoService`](crate::TodoService)
//! or [`TaskPlanner`](crate::TaskPlanner) is one of four kinds:
//!
//! - [`WorkflowError::NotFound`]: no todo carries the requested identifier
//! - [`WorkflowError::Validation`]: the input was rejected before any I/O
//! - [`WorkflowError::Storage`]: the persistence backend failed
//! - [`WorkflowError::Upstream`]: the AI service failed or replied with garbage
//!
//! # Examples
//!
//! ```
//! use listy_domain::TodoIdentifier;
//! use listy_workflow::errors::WorkflowError;
//!
//! let error = WorkflowError::not_found(TodoIdentifier::new(3));
//! assert!(error.is_not_found());
//! assert_eq!(error.to_string(), "todo with ID 3 not found");
//! ```

use listy_domain::{DomainError, TodoIdentifier, ValidationError};
use thiserror::Error;

pub type WorkflowResult<T> = Result<T, WorkflowError>;

// =============================================================================
// WorkflowError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("todo with ID {identifier} not found")]
    NotFound { identifier: TodoIdentifier },

    #[error("{message}")]
    Validation { message: String },

    #[error("storage {operation} failed: {message}")]
    Storage { operation: String, message: String },

    #[error("{message}")]
    Upstream { message: String },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl WorkflowError {
    #[must_use]
    pub const fn not_found(identifier: TodoIdentifier) -> Self {
        Self::NotFound { identifier }
    }

    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a storage error for the named backend operation
    /// (`insert`, `update_by_id`, `delete_by_id`, `select_all`).
    #[must_use]
    pub fn storage(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Storage {
            operation: operation.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl WorkflowError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(self, Self::Storage { .. })
    }

    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<ValidationError> for WorkflowError {
    fn from(error: ValidationError) -> Self {
        Self::validation(error.to_string())
    }
}

impl From<DomainError> for WorkflowError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::TodoNotFound(identifier) => Self::not_found(identifier),
            DomainError::Validation(error) => error.into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
