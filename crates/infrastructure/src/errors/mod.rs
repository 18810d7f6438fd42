//! Infrastructure error types.
//!
//! Adapters report failures as [`InfraError`] and convert them into a
//! [`WorkflowError`] at the port boundary: store failures become
//! `Storage`, AI failures become `Upstream`.
//!
//! # Examples
//!
//! ```
//! use listy_infrastructure::errors::{InfraError, RemoteTarget};
//!
//! let error = InfraError::unexpected_status(RemoteTarget::Store, 503, "maintenance");
//! assert_eq!(
//!     error.to_string(),
//!     "store responded with HTTP 503: maintenance"
//! );
//! ```

use std::fmt;

use listy_workflow::WorkflowError;
use thiserror::Error;

// =============================================================================
// RemoteTarget
// =============================================================================

/// Remote system an HTTP failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteTarget {
    Store,
    AiService,
}

impl fmt::Display for RemoteTarget {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store => write!(formatter, "store"),
            Self::AiService => write!(formatter, "AI service"),
        }
    }
}

// =============================================================================
// InfraError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InfraError {
    #[error("connection to {target} failed: {message}")]
    Connection {
        target: RemoteTarget,
        message: String,
    },

    #[error("request to {target} timed out: {message}")]
    Timeout {
        target: RemoteTarget,
        message: String,
    },

    #[error("request to {target} failed: {message}")]
    Request {
        target: RemoteTarget,
        message: String,
    },

    #[error("{target} responded with HTTP {status}: {body}")]
    UnexpectedStatus {
        target: RemoteTarget,
        status: u16,
        body: String,
    },

    #[error("I/O error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

// =============================================================================
// Factory Methods
// =============================================================================

impl InfraError {
    /// Classifies a `reqwest` transport error.
    #[must_use]
    pub fn from_transport(target: RemoteTarget, error: &reqwest::Error) -> Self {
        let message = error.to_string();
        if error.is_timeout() {
            Self::Timeout { target, message }
        } else if error.is_connect() {
            Self::Connection { target, message }
        } else {
            Self::Request { target, message }
        }
    }

    #[must_use]
    pub fn unexpected_status(target: RemoteTarget, status: u16, body: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            target,
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn io(path: impl fmt::Display, error: &std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// =============================================================================
// Port Conversions
// =============================================================================

impl InfraError {
    /// Reports this failure as a storage error for `operation`.
    #[must_use]
    pub fn into_storage(self, operation: &str) -> WorkflowError {
        WorkflowError::storage(operation, self.to_string())
    }

    /// Reports this failure as an upstream (AI service) error.
    #[must_use]
    pub fn into_upstream(self) -> WorkflowError {
        WorkflowError::upstream(self.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================
