use serde::{Deserialize, Serialize};

use super::entity::Todo;
use super::identifier::{ListIdentifier, TodoIdentifier};
use super::patch::Patch;
use crate::ai::AiTask;

// =============================================================================
// NewTodo
// =============================================================================

/// Input for creating a todo. The identifier is assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewTodo {
    pub item: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_id: Option<ListIdentifier>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl NewTodo {
    #[must_use]
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            item: item.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn on_list(mut self, list_id: Option<ListIdentifier>) -> Self {
        self.list_id = list_id;
        self
    }

    /// Builds a request from an AI suggestion, keeping its metadata.
    #[must_use]
    pub fn from_ai_task(task: AiTask, list_id: Option<ListIdentifier>) -> Self {
        Self {
            item: task.text,
            list_id,
            priority: task.priority,
            estimated_time: task.estimated_time,
            category: task.category,
        }
    }

    /// Materializes the record under the given identifier.
    #[must_use]
    pub fn into_todo(self, id: TodoIdentifier) -> Todo {
        Todo::new(id, self.item)
            .with_list(self.list_id)
            .with_priority(self.priority)
            .with_estimated_time(self.estimated_time)
            .with_category(self.category)
    }
}

// =============================================================================
// TodoPatch
// =============================================================================

/// Partial update of a todo. Only fields that were sent are applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub item: Patch<String>,

    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub done: Patch<bool>,
}

impl TodoPatch {
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

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.item.is_absent() && self.done.is_absent()
    }

    /// Applies the present fields. `item` and `done` are not nullable, so an
    /// explicit `null` leaves them untouched.
    pub fn apply(self, todo: &mut Todo) {
        self.item.apply_to(&mut todo.item);
        match self.done {
            Patch::Value(true) => todo.mark_complete(),
            Patch::Value(false) => todo.mark_incomplete(),
            Patch::Absent | Patch::Null => {}
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
