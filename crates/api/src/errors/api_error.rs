use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::dto::Envelope;

// =============================================================================
// ApiError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Storage { message: String },

    #[error("{message}")]
    Upstream { message: String },

    #[error("{message}")]
    Internal {
        message: String,
        details: Vec<String>,
    },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>, details: Vec<String>) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn invalid_identifier() -> Self {
        Self::validation("Invalid ID")
    }
}

// =============================================================================
// Query Methods
// =============================================================================

impl ApiError {
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Storage { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Short summary placed in the envelope's `message` field.
    #[must_use]
    pub const fn summary(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "Invalid request",
            Self::NotFound { .. } => "Todo not found",
            Self::Storage { .. } => "Storage operation failed",
            Self::Upstream { .. } => "AI service request failed",
            Self::Internal { .. } => "Internal server error",
        }
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

// =============================================================================
// IntoResponse Implementation
// =============================================================================

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if self.is_server_error() {
            tracing::error!(status = status_code.as_u16(), error = %self, "request failed");
        } else {
            tracing::debug!(status = status_code.as_u16(), error = %self, "request rejected");
        }

        let summary = self.summary();
        let (message, details) = match self {
            Self::Internal { message, details } => (message, details),
            Self::Validation { message }
            | Self::NotFound { message }
            | Self::Storage { message }
            | Self::Upstream { message } => (message, Vec::new()),
        };

        let body = Envelope::failure(message, summary).with_details(details);
        (status_code, Json(body)).into_response()
    }
}

// =============================================================================
// Tests
// =============================================================================
