//! `From` implementations mapping lower-layer errors onto [`ApiError`].

use axum::extract::rejection::JsonRejection;
use listy_domain::ValidationError;
use listy_workflow::WorkflowError;

use super::api_error::ApiError;

// =============================================================================
// From<WorkflowError> for ApiError
// =============================================================================

impl From<WorkflowError> for ApiError {
    fn from(error: WorkflowError) -> Self {
        let message = error.to_string();
        match error {
            WorkflowError::NotFound { .. } => Self::NotFound { message },
            WorkflowError::Validation { .. } => Self::Validation { message },
            WorkflowError::Storage { .. } => Self::Storage { message },
            WorkflowError::Upstream { .. } => Self::Upstream { message },
        }
    }
}

// =============================================================================
// From<ValidationError> for ApiError
// =============================================================================

impl From<ValidationError> for ApiError {
    fn from(error: ValidationError) -> Self {
        Self::validation(error.to_string())
    }
}

// =============================================================================
// From<JsonRejection> for ApiError
// =============================================================================

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

// =============================================================================
// Tests
// =============================================================================
