//! Where CLI commands are executed: over HTTP or in-process.

use std::sync::Arc;

use lambars::effect::AsyncIO;
use listy_api::dto::{AiCreateRequest, CreateTodoRequest, UpdateTodoRequest};
use listy_domain::{AiTask, ListIdentifier, NewTodo, Todo, TodoIdentifier, TodoPatch};
use listy_workflow::{
    BulkCreation, TaskBreakdown, TaskPlanner, TodoService, TodoStore, WorkflowError,
};
use thiserror::Error;

use crate::client::{ApiClient, ClientError};

// =============================================================================
// BackendError
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error(transparent)]
    Remote(#[from] ClientError),

    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

pub type BackendResult<T> = Result<T, BackendError>;

// =============================================================================
// Listing
// =============================================================================

/// Which todos a listing command shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    All,
    Pending,
    Completed,
    /// One list; `None` is the main list.
    OnList(Option<ListIdentifier>),
}

// =============================================================================
// TodoBackend
// =============================================================================

pub trait TodoBackend: Send + Sync {
    fn list(&self, listing: Listing) -> AsyncIO<BackendResult<Vec<Todo>>>;

    fn lists(&self) -> AsyncIO<BackendResult<Vec<ListIdentifier>>>;

    fn add(&self, request: NewTodo) -> AsyncIO<BackendResult<Todo>>;

    fn update(&self, id: TodoIdentifier, patch: TodoPatch) -> AsyncIO<BackendResult<Todo>>;

    fn toggle(&self, id: TodoIdentifier) -> AsyncIO<BackendResult<Todo>>;

    fn remove(&self, id: TodoIdentifier) -> AsyncIO<BackendResult<()>>;

    fn breakdown(&self, goal: String) -> AsyncIO<BackendResult<Vec<AiTask>>>;

    fn create_tasks(
        &self,
        tasks: Vec<AiTask>,
        list_id: Option<ListIdentifier>,
    ) -> AsyncIO<BackendResult<BulkCreation>>;
}

// =============================================================================
// Remote
// =============================================================================

impl TodoBackend for ApiClient {
    fn list(&self, listing: Listing) -> AsyncIO<BackendResult<Vec<Todo>>> {
        let client = self.clone();
        AsyncIO::new(move || async move {
            let todos = match listing {
                Listing::All => client.get_todos().await?,
                Listing::Pending => client.get_pending_todos().await?,
                Listing::Completed => client.get_completed_todos().await?,
                Listing::OnList(list_id) => client.get_todos_by_list(list_id.as_ref()).await?,
            };
            Ok(todos)
        })
    }

    fn lists(&self) -> AsyncIO<BackendResult<Vec<ListIdentifier>>> {
        let client = self.clone();
        AsyncIO::new(move || async move { Ok(client.get_lists().await?) })
    }

    fn add(&self, request: NewTodo) -> AsyncIO<BackendResult<Todo>> {
        let client = self.clone();
        AsyncIO::new(move || async move {
            let body = CreateTodoRequest::new(
                request.item,
                request.list_id.map(|list_id| list_id.as_str().to_string()),
            );
            Ok(client.create_todo(&body).await?)
        })
    }

    fn update(&self, id: TodoIdentifier, patch: TodoPatch) -> AsyncIO<BackendResult<Todo>> {
        let client = self.clone();
        AsyncIO::new(move || async move {
            let body = UpdateTodoRequest {
                item: patch.item,
                done: patch.done,
            };
            Ok(client.update_todo(id, &body).await?)
        })
    }

    fn toggle(&self, id: TodoIdentifier) -> AsyncIO<BackendResult<Todo>> {
        let client = self.clone();
        AsyncIO::new(move || async move { Ok(client.toggle_todo(id).await?) })
    }

    fn remove(&self, id: TodoIdentifier) -> AsyncIO<BackendResult<()>> {
        let client = self.clone();
        AsyncIO::new(move || async move { Ok(client.delete_todo(id).await?) })
    }

    fn breakdown(&self, goal: String) -> AsyncIO<BackendResult<Vec<AiTask>>> {
        let client = self.clone();
        AsyncIO::new(move || async move { Ok(ApiClient::breakdown(&client, &goal).await?) })
    }

    fn create_tasks(
        &self,
        tasks: Vec<AiTask>,
        list_id: Option<ListIdentifier>,
    ) -> AsyncIO<BackendResult<BulkCreation>> {
        let client = self.clone();
        AsyncIO::new(move || async move {
            let body = AiCreateRequest {
                tasks,
                list_id: list_id.map(|list_id| list_id.as_str().to_string()),
            };
            let (created, failures) = client.create_from_tasks(&body).await?;
            Ok(BulkCreation { created, failures })
        })
    }
}

// =============================================================================
// Local
// =============================================================================

/// Runs the workflows in this process against any [`TodoStore`].
#[derive(Clone)]
pub struct LocalBackend {
    todos: TodoService,
    planner: TaskPlanner,
}

impl LocalBackend {
    #[must_use]
    pub fn new(store: Arc<dyn TodoStore>, breakdown: Arc<dyn TaskBreakdown>) -> Self {
        Self {
            todos: TodoService::new(store),
            planner: TaskPlanner::new(breakdown),
        }
    }

    #[must_use]
    pub const fn service(&self) -> &TodoService {
        &self.todos
    }
}

impl TodoBackend for LocalBackend {
    fn list(&self, listing: Listing) -> AsyncIO<BackendResult<Vec<Todo>>> {
        let backend = self.clone();
        AsyncIO::new(move || async move {
            let todos = match listing {
                Listing::All => backend.todos.list_all().await?,
                Listing::Pending => backend.todos.list_pending().await?,
                Listing::Completed => backend.todos.list_completed().await?,
                Listing::OnList(list_id) => backend.todos.list_by_list(list_id.as_ref()).await?,
            };
            Ok(todos)
        })
    }

    fn lists(&self) -> AsyncIO<BackendResult<Vec<ListIdentifier>>> {
        let backend = self.clone();
        AsyncIO::new(move || async move { Ok(backend.todos.list_distinct_list_ids().await?) })
    }

    fn add(&self, request: NewTodo) -> AsyncIO<BackendResult<Todo>> {
        let backend = self.clone();
        AsyncIO::new(move || async move { Ok(backend.todos.create(request).await?) })
    }

    fn update(&self, id: TodoIdentifier, patch: TodoPatch) -> AsyncIO<BackendResult<Todo>> {
        let backend = self.clone();
        AsyncIO::new(move || async move { Ok(backend.todos.update(id, patch).await?) })
    }

    fn toggle(&self, id: TodoIdentifier) -> AsyncIO<BackendResult<Todo>> {
        let backend = self.clone();
        AsyncIO::new(move || async move { Ok(backend.todos.toggle(id).await?) })
    }

    fn remove(&self, id: TodoIdentifier) -> AsyncIO<BackendResult<()>> {
        let backend = self.clone();
        AsyncIO::new(move || async move { Ok(backend.todos.delete(id).await?) })
    }

    fn breakdown(&self, goal: String) -> AsyncIO<BackendResult<Vec<AiTask>>> {
        let backend = self.clone();
        AsyncIO::new(move || async move { Ok(backend.planner.breakdown(&goal).await?) })
    }

    fn create_tasks(
        &self,
        tasks: Vec<AiTask>,
        list_id: Option<ListIdentifier>,
    ) -> AsyncIO<BackendResult<BulkCreation>> {
        let backend = self.clone();
        AsyncIO::new(move || async move {
            Ok(self
                .planner
                .create_suggested(&backend.todos, tasks, list_id)
                .await?)
        })
    }
}
