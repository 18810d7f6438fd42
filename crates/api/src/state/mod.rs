use std::sync::Arc;

use listy_workflow::{TaskBreakdown, TaskPlanner, TodoService, TodoStore};

// =============================================================================
// AppState
// =============================================================================

/// Shared handler state. The store is built once at startup and never
/// replaced.
#[derive(Clone)]
pub struct AppState {
    pub todos: TodoService,

    pub planner: TaskPlanner,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>, breakdown: Arc<dyn TaskBreakdown>) -> Self {
        Self {
            todos: TodoService::new(store),
            planner: TaskPlanner::new(breakdown),
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.todos.store().backend_name()
    }
}
