//! Request bodies accepted by the API.
//!
//! Required fields default to empty values during deserialization so that a
//! missing key is reported as a validation error in the response envelope
//! rather than as a bare extractor rejection.

use listy_domain::{AiTask, ListIdentifier, NewTodo, Patch, TodoPatch, ValidationError};
use serde::{Deserialize, Serialize};

// =============================================================================
// CreateTodoRequest
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub item: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

impl CreateTodoRequest {
    #[must_use]
    pub fn new(item: impl Into<String>, list_id: Option<String>) -> Self {
        Self {
            item: item.into(),
            list_id,
        }
    }

    /// Validates the body and converts it into a domain request.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyValue`] when `item` is blank.
    pub fn into_new_todo(self) -> Result<NewTodo, ValidationError> {
        if self.item.trim().is_empty() {
            return Err(ValidationError::empty_value("item"));
        }
        let list_id = self
            .list_id
            .as_deref()
            .and_then(ListIdentifier::from_selector);
        Ok(NewTodo::new(self.item).on_list(list_id))
    }
}

// =============================================================================
// UpdateTodoRequest
// =============================================================================

/// Partial update body; absent keys leave the stored value unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateTodoRequest {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub item: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub done: Patch<bool>,
}

impl UpdateTodoRequest {
    #[must_use]
    pub fn item(item: impl Into<String>) -> Self {
        Self {
            item: Patch::Value(item.into()),
            done: Patch::Absent,
        }
    }

    #[must_use]
    pub const fn done(done: bool) -> Self {
        Self {
            item: Patch::Absent,
            done: Patch::Value(done),
        }
    }
}

impl From<UpdateTodoRequest> for TodoPatch {
    fn from(request: UpdateTodoRequest) -> Self {
        Self {
            item: request.item,
            done: request.done,
        }
    }
}

// =============================================================================
// AI Requests
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AiBreakdownRequest {
    #[serde(default)]
    pub goal: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AiCreateRequest {
    #[serde(default)]
    pub tasks: Vec<AiTask>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<String>,
}

impl AiCreateRequest {
    #[must_use]
    pub fn list_identifier(&self) -> Option<ListIdentifier> {
        self.list_id
            .as_deref()
            .and_then(ListIdentifier::from_selector)
    }
}

// =============================================================================
// Tests
// =============================================================================
