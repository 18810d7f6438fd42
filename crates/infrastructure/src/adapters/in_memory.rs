//! Process-local todo store.
//!
//! Backs the standalone in-memory CLI and the API tests. Contents live in a
//! `PersistentVector` behind an `Arc<RwLock<...>>`, so clones share the same
//! collection and `select_all` copies out of a cheap snapshot.

use std::sync::Arc;

use lambars::effect::AsyncIO;
use lambars::persistent::PersistentVector;
use listy_domain::{Todo, TodoIdentifier};
use listy_workflow::{TodoStore, WorkflowResult};
use tokio::sync::RwLock;

type Snapshot = PersistentVector<Todo>;

// =============================================================================
// InMemoryTodoStore
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoStore {
    todos: Arc<RwLock<Snapshot>>,
}

impl InMemoryTodoStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `todos`, kept in the given order.
    #[must_use]
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(todos.into_iter().collect())),
        }
    }

    /// Replaces the snapshot with `change(current)`.
    fn swap<F>(&self, change: F) -> AsyncIO<WorkflowResult<()>>
    where
        F: FnOnce(&Snapshot) -> Snapshot + Send + 'static,
    {
        let todos = Arc::clone(&self.todos);
        AsyncIO::new(move || async move {
            let mut guard = todos.write().await;
            *guard = change(&guard);
            Ok(())
        })
    }
}

fn replaced(todos: &Snapshot, id: TodoIdentifier, todo: Todo) -> Snapshot {
    todos
        .find_index(|stored| stored.id == id)
        .and_then(|index| todos.update(index, todo))
        .unwrap_or_else(|| todos.clone())
}

fn without(todos: &Snapshot, id: TodoIdentifier) -> Snapshot {
    todos.iter().filter(|todo| todo.id != id).cloned().collect()
}

impl TodoStore for InMemoryTodoStore {
    fn insert(&self, todo: Todo) -> AsyncIO<WorkflowResult<()>> {
        self.swap(move |todos| todos.push_back(todo))
    }

    fn update_by_id(&self, id: TodoIdentifier, todo: Todo) -> AsyncIO<WorkflowResult<()>> {
        self.swap(move |todos| replaced(todos, id, todo))
    }

    fn delete_by_id(&self, id: TodoIdentifier) -> AsyncIO<WorkflowResult<()>> {
        self.swap(move |todos| without(todos, id))
    }

    fn select_all(&self) -> AsyncIO<WorkflowResult<Vec<Todo>>> {
        let todos = Arc::clone(&self.todos);
        AsyncIO::new(move || async move {
            let snapshot = todos.read().await.clone();
            Ok(snapshot.into_iter().collect())
        })
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

// =============================================================================
// Tests
// =============================================================================
