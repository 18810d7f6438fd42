//! Suggested subtasks returned by the AI breakdown.

use serde::{Deserialize, Serialize};

/// One subtask proposed for a goal.
///
/// Only `text` is required; the model is asked for the other fields but
/// they are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiTask {
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl AiTask {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            priority: None,
            estimated_time: None,
            category: None,
        }
    }
}
