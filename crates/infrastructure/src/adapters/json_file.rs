//! Todo store persisted as a single JSON array on disk.
//!
//! Every mutation reads the whole file, changes the collection and writes
//! it back. A missing or blank file reads as an empty collection. Access is
//! serialized within the process; other processes writing the same file are
//! not coordinated.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use lambars::effect::AsyncIO;
use listy_domain::todo::collection;
use listy_domain::{Todo, TodoIdentifier};
use listy_workflow::{TodoStore, WorkflowResult};
use tokio::sync::Mutex;

use crate::errors::InfraError;

// =============================================================================
// JsonFileTodoStore
// =============================================================================

#[derive(Debug, Clone)]
pub struct JsonFileTodoStore {
    path: PathBuf,
    guard: Arc<Mutex<()>>,
}

impl JsonFileTodoStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Arc::new(Mutex::new(())),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Todo>, InfraError> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(InfraError::io(self.path.display(), &error)),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&contents).map_err(|error| {
            InfraError::serialization(format!("{}: {error}", self.path.display()))
        })
    }

    async fn save(&self, todos: &[Todo]) -> Result<(), InfraError> {
        let contents = serde_json::to_string_pretty(todos)
            .map_err(|error| InfraError::serialization(error.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|error| InfraError::io(parent.display(), &error))?;
        }

        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|error| InfraError::io(self.path.display(), &error))?;

        tracing::debug!(path = %self.path.display(), count = todos.len(), "todo file written");
        Ok(())
    }

    async fn mutate<F>(&self, operation: &str, change: F) -> WorkflowResult<()>
    where
        F: FnOnce(&mut Vec<Todo>) + Send + 'static,
    {
        let _lock = self.guard.lock().await;
        let mut todos = self
            .load()
            .await
            .map_err(|error| error.into_storage(operation))?;
        change(&mut todos);
        self.save(&todos)
            .await
            .map_err(|error| error.into_storage(operation))
    }
}

impl TodoStore for JsonFileTodoStore {
    fn insert(&self, todo: Todo) -> AsyncIO<WorkflowResult<()>> {
        let store = self.clone();
        AsyncIO::new(move || async move {
            store.mutate("insert", move |todos| todos.push(todo)).await
        })
    }

    fn update_by_id(&self, id: TodoIdentifier, todo: Todo) -> AsyncIO<WorkflowResult<()>> {
        let store = self.clone();
        AsyncIO::new(move || async move {
            store
                .mutate("update_by_id", move |todos| {
                    // Unknown ids leave the file unchanged.
                    let _ = collection::modify_by_identifier(todos, id, |stored| *stored = todo);
                })
                .await
        })
    }

    fn delete_by_id(&self, id: TodoIdentifier) -> AsyncIO<WorkflowResult<()>> {
        let store = self.clone();
        AsyncIO::new(move || async move {
            store
                .mutate("delete_by_id", move |todos| {
                    let _ = collection::remove_by_identifier(todos, id);
                })
                .await
        })
    }

    fn select_all(&self) -> AsyncIO<WorkflowResult<Vec<Todo>>> {
        let store = self.clone();
        AsyncIO::new(move || async move {
            let _lock = store.guard.lock().await;
            store
                .load()
                .await
                .map_err(|error| error.into_storage("select_all"))
        })
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

// =============================================================================
// Tests
// =============================================================================
