use std::sync::Arc;

use listy_domain::{AiTask, ListIdentifier, NewTodo, ValidationError};

use crate::errors::WorkflowResult;
use crate::ports::TaskBreakdown;
use crate::workflows::todos::{BulkCreation, TodoService};

// =============================================================================
// TaskPlanner
// =============================================================================

/// AI-assisted planning: break a goal into subtasks, then turn accepted
/// suggestions into todos.
#[derive(Clone)]
pub struct TaskPlanner {
    breakdown: Arc<dyn TaskBreakdown>,
}

impl TaskPlanner {
    #[must_use]
    pub fn new(breakdown: Arc<dyn TaskBreakdown>) -> Self {
        Self { breakdown }
    }

    /// Asks the breakdown service for subtasks of `goal`.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Validation`](crate::WorkflowError::Validation)
    /// for a blank goal and [`WorkflowError::Upstream`](crate::WorkflowError::Upstream)
    /// when the service fails or its reply cannot be parsed.
    pub async fn breakdown(&self, goal: &str) -> WorkflowResult<Vec<AiTask>> {
        let goal = goal.trim();
        if goal.is_empty() {
            return Err(ValidationError::empty_value("goal").into());
        }

        let tasks = self.breakdown.breakdown(goal.to_string()).await?;

        tracing::info!(goal = %goal, count = tasks.len(), "goal broken down");
        Ok(tasks)
    }

    /// Creates one todo per suggestion on the given list.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Validation`](crate::WorkflowError::Validation)
    /// when `tasks` is empty. Per-task failures are reported in the outcome.
    pub async fn create_suggested(
        &self,
        service: &TodoService,
        tasks: Vec<AiTask>,
        list_id: Option<ListIdentifier>,
    ) -> WorkflowResult<BulkCreation> {
        if tasks.is_empty() {
            return Err(ValidationError::empty_value("tasks").into());
        }

        let requests = tasks
            .into_iter()
            .map(|task| NewTodo::from_ai_task(task, list_id.clone()))
            .collect();

        Ok(service.create_many(requests).await)
    }
}
