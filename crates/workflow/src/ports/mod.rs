use lambars::effect::AsyncIO;
use listy_domain::{AiTask, Todo, TodoIdentifier};

use crate::errors::WorkflowResult;

// =============================================================================
// TodoStore
// =============================================================================

/// Persistence contract shared by every backend.
///
/// The store is a plain record container: it neither assigns identifiers
/// nor checks existence. An empty store answers `select_all` with an empty
/// vector, never with an error.
///
/// Every operation is returned as a deferred [`AsyncIO`]; nothing touches the
/// backend until the action is awaited.
pub trait TodoStore: Send + Sync {
    fn insert(&self, todo: Todo) -> AsyncIO<WorkflowResult<()>>;

    /// Replaces the stored record with the given identifier.
    fn update_by_id(&self, id: TodoIdentifier, todo: Todo) -> AsyncIO<WorkflowResult<()>>;

    fn delete_by_id(&self, id: TodoIdentifier) -> AsyncIO<WorkflowResult<()>>;

    fn select_all(&self) -> AsyncIO<WorkflowResult<Vec<Todo>>>;

    /// Short backend name used in logs.
    fn backend_name(&self) -> &'static str;
}

// =============================================================================
// TaskBreakdown
// =============================================================================

/// Splits a goal into suggested subtasks.
///
/// An empty vector is a valid answer for a goal that is already atomic.
pub trait TaskBreakdown: Send + Sync {
    fn breakdown(&self, goal: String) -> AsyncIO<WorkflowResult<Vec<AiTask>>>;
}
