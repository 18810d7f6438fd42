//! Response bodies produced by the API.
//!
//! Every endpoint answers with an [`Envelope`]; the payload type varies.

use listy_domain::AiTask;
use serde::{Deserialize, Serialize};

// =============================================================================
// Envelope
// =============================================================================

/// Uniform `{success, data?, error?, message?, warnings?}` wrapper.
///
/// `details` only appears on bulk failures and lists per-item errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl<T> Envelope<T> {
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
            warnings: Vec::new(),
            details: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }

    #[must_use]
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl Envelope<()> {
    /// Successful response that carries only a message.
    #[must_use]
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: Some(message.into()),
            warnings: Vec::new(),
            details: Vec::new(),
        }
    }

    #[must_use]
    pub fn failure(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: Some(message.into()),
            warnings: Vec::new(),
            details: Vec::new(),
        }
    }
}

// =============================================================================
// Health
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

impl HealthResponse {
    pub const SERVICE: &'static str = "listy-api";

    #[must_use]
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: Self::SERVICE.to_string(),
            version: version.into(),
        }
    }

    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

// =============================================================================
// AI
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiBreakdownResponse {
    pub goal: String,
    pub suggested_tasks: Vec<AiTask>,
}

// =============================================================================
// Tests
// =============================================================================
