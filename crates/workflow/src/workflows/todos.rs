use std::sync::Arc;

use lambars::pipe;
use listy_domain::todo::collection;
use listy_domain::{ListIdentifier, NewTodo, Todo, TodoIdentifier, TodoPatch};

use crate::errors::{WorkflowError, WorkflowResult};
use crate::ports::TodoStore;

// =============================================================================
// TodoService
// =============================================================================

/// Todo use cases over an injected store.
///
/// Every operation loads the full collection and works on that snapshot.
/// Nothing is locked between the read and the write, so concurrent writers
/// can be handed the same identifier or overwrite each other's changes.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &Arc<dyn TodoStore> {
        &self.store
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Every todo, ascending by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Storage`] when the backend fails.
    pub async fn list_all(&self) -> WorkflowResult<Vec<Todo>> {
        let todos = self.store.select_all().await?;
        Ok(collection::sorted_by_identifier(todos))
    }

    /// # Errors
    ///
    /// Returns [`WorkflowError::Storage`] when the backend fails.
    pub async fn list_pending(&self) -> WorkflowResult<Vec<Todo>> {
        let todos = self.store.select_all().await?;
        Ok(pipe!(todos, collection::sorted_by_identifier, collection::pending))
    }

    /// # Errors
    ///
    /// Returns [`WorkflowError::Storage`] when the backend fails.
    pub async fn list_completed(&self) -> WorkflowResult<Vec<Todo>> {
        let todos = self.store.select_all().await?;
        Ok(pipe!(todos, collection::sorted_by_identifier, collection::completed))
    }

    /// Todos on one list. `None` selects todos that have no list.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Storage`] when the backend fails.
    pub async fn list_by_list(
        &self,
        list_id: Option<&ListIdentifier>,
    ) -> WorkflowResult<Vec<Todo>> {
        let todos = self.store.select_all().await?;
        Ok(pipe!(todos, collection::sorted_by_identifier, |todos| {
            collection::on_list(todos, list_id)
        }))
    }

    /// Distinct non-empty list names, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Storage`] when the backend fails.
    pub async fn list_distinct_list_ids(&self) -> WorkflowResult<Vec<ListIdentifier>> {
        let todos = self.store.select_all().await?;
        Ok(collection::distinct_list_identifiers(&todos))
    }

    /// # Errors
    ///
    /// Returns [`WorkflowError::NotFound`] when no todo has the identifier,
    /// or [`WorkflowError::Storage`] when the backend fails.
    pub async fn get_by_id(&self, id: TodoIdentifier) -> WorkflowResult<Todo> {
        let todos = self.store.select_all().await?;
        collection::find_by_identifier(&todos, id)
            .map(|(_, todo)| todo.clone())
            .ok_or(WorkflowError::not_found(id))
    }

    // -------------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------------

    /// Creates an open todo under the next free identifier.
    ///
    /// The item text is not validated here; callers reject empty input.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::Storage`] when the backend fails.
    pub async fn create(&self, request: NewTodo) -> WorkflowResult<Todo> {
        let todos = self.store.select_all().await?;
        let todo = request.into_todo(collection::next_identifier(&todos));

        self.store.insert(todo.clone()).await?;

        tracing::info!(
            id = %todo.id,
            backend = self.store.backend_name(),
            "todo created"
        );
        Ok(todo)
    }

    /// Creates several todos one after another.
    ///
    /// A failed creation does not stop the batch; its message is collected
    /// in [`BulkCreation::failures`].
    pub async fn create_many(&self, requests: Vec<NewTodo>) -> BulkCreation {
        let mut outcome = BulkCreation::default();

        for request in requests {
            let item = request.item.clone();
            match self.create(request).await {
                Ok(todo) => outcome.created.push(todo),
                Err(error) => {
                    tracing::warn!(item = %item, error = %error, "bulk create skipped a todo");
                    outcome
                        .failures
                        .push(format!("Failed to create task: {item} - {error}"));
                }
            }
        }

        outcome
    }

    /// Applies the fields present in `patch` and saves the full record.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::NotFound`] when no todo has the identifier,
    /// or [`WorkflowError::Storage`] when the backend fails.
    pub async fn update(&self, id: TodoIdentifier, patch: TodoPatch) -> WorkflowResult<Todo> {
        self.modify(id, |todo| patch.apply(todo)).await
    }

    /// # Errors
    ///
    /// Returns [`WorkflowError::NotFound`] when no todo has the identifier,
    /// or [`WorkflowError::Storage`] when the backend fails.
    pub async fn toggle(&self, id: TodoIdentifier) -> WorkflowResult<Todo> {
        self.modify(id, Todo::toggle_done).await
    }

    /// Deletes after confirming the todo exists.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::NotFound`] when no todo has the identifier,
    /// or [`WorkflowError::Storage`] when the backend fails.
    pub async fn delete(&self, id: TodoIdentifier) -> WorkflowResult<()> {
        self.get_by_id(id).await?;
        self.store.delete_by_id(id).await?;

        tracing::info!(id = %id, backend = self.store.backend_name(), "todo deleted");
        Ok(())
    }

    async fn modify<F>(&self, id: TodoIdentifier, change: F) -> WorkflowResult<Todo>
    where
        F: FnOnce(&mut Todo) + Send,
    {
        let mut todos = self.store.select_all().await?;
        let todo = collection::modify_by_identifier(&mut todos, id, change)?;

        self.store.update_by_id(id, todo.clone()).await?;

        tracing::info!(id = %id, done = todo.done, "todo updated");
        Ok(todo)
    }
}

// =============================================================================
// BulkCreation
// =============================================================================

/// Outcome of [`TodoService::create_many`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkCreation {
    pub created: Vec<Todo>,
    pub failures: Vec<String>,
}

impl BulkCreation {
    #[must_use]
    pub fn is_total_failure(&self) -> bool {
        self.created.is_empty() && !self.failures.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
