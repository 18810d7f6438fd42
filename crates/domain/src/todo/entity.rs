use serde::{Deserialize, Deserializer, Serialize};

use super::identifier::{ListIdentifier, TodoIdentifier};

// =============================================================================
// Todo
// =============================================================================

/// A single todo record.
///
/// This is both the domain entity and the row shape stored by every backend.
/// Optional descriptive fields are omitted from JSON when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoIdentifier,

    pub item: String,

    #[serde(default, deserialize_with = "null_as_false")]
    pub done: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<ListIdentifier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Todo {
    /// Creates an open todo on the main list.
    #[must_use]
    pub fn new(id: TodoIdentifier, item: impl Into<String>) -> Self {
        Self {
            id,
            item: item.into(),
            done: false,
            list_id: None,
            priority: None,
            estimated_time: None,
            category: None,
        }
    }

    #[must_use]
    pub fn with_list(mut self, list_id: Option<ListIdentifier>) -> Self {
        self.list_id = list_id;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Option<String>) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_estimated_time(mut self, estimated_time: Option<String>) -> Self {
        self.estimated_time = estimated_time;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    pub fn mark_complete(&mut self) {
        self.done = true;
    }

    pub fn mark_incomplete(&mut self) {
        self.done = false;
    }

    pub fn toggle_done(&mut self) {
        self.done = !self.done;
    }

    /// Returns true when the todo sits on the given list (`None` is main).
    #[must_use]
    pub fn belongs_to(&self, list_id: Option<&ListIdentifier>) -> bool {
        self.list_id.as_ref() == list_id
    }
}

/// Rows from a nullable `done` column read `null` as an open todo.
fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// Tests
// =============================================================================
