//! Shared fakes for workflow integration tests.
//!
//! Each integration test file is its own crate, so helpers unused by one
//! of them would warn without the allow below.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use lambars::effect::AsyncIO;
use listy_domain::{AiTask, Todo, TodoIdentifier};
use listy_workflow::{TaskBreakdown, TodoStore, WorkflowError, WorkflowResult};

// =============================================================================
// FakeStore
// =============================================================================

#[derive(Default)]
struct FakeState {
    todos: Vec<Todo>,
    failing_operation: Option<&'static str>,
    insert_budget: Option<usize>,
}

impl FakeState {
    fn check(&self, operation: &'static str) -> WorkflowResult<()> {
        match self.failing_operation {
            Some(failing) if failing == operation => {
                Err(WorkflowError::storage(operation, "injected failure"))
            }
            _ => Ok(()),
        }
    }
}

/// Vector-backed store that can be told to fail one operation.
#[derive(Default)]
pub struct FakeStore {
    state: Arc<Mutex<FakeState>>,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn with_todos(todos: Vec<Todo>) -> Arc<Self> {
        let store = Self::default();
        store.state.lock().unwrap().todos = todos;
        Arc::new(store)
    }

    pub fn fail_on(&self, operation: &'static str) {
        self.state.lock().unwrap().failing_operation = Some(operation);
    }

    /// Fails inserts after `count` successful ones.
    pub fn fail_inserts_after(&self, count: usize) {
        self.state.lock().unwrap().insert_budget = Some(count);
    }

    pub fn snapshot(&self) -> Vec<Todo> {
        self.state.lock().unwrap().todos.clone()
    }

    fn with_state<T, F>(&self, change: F) -> AsyncIO<WorkflowResult<T>>
    where
        T: Send + 'static,
        F: FnOnce(&mut FakeState) -> WorkflowResult<T> + Send + 'static,
    {
        let state = Arc::clone(&self.state);
        AsyncIO::new(move || async move { change(&mut state.lock().unwrap()) })
    }
}

impl TodoStore for FakeStore {
    fn insert(&self, todo: Todo) -> AsyncIO<WorkflowResult<()>> {
        self.with_state(move |state| {
            state.check("insert")?;
            if let Some(remaining) = state.insert_budget.as_mut() {
                if *remaining == 0 {
                    return Err(WorkflowError::storage("insert", "quota exceeded"));
                }
                *remaining -= 1;
            }
            state.todos.push(todo);
            Ok(())
        })
    }

    fn update_by_id(&self, id: TodoIdentifier, todo: Todo) -> AsyncIO<WorkflowResult<()>> {
        self.with_state(move |state| {
            state.check("update_by_id")?;
            for stored in state.todos.iter_mut().filter(|stored| stored.id == id) {
                *stored = todo.clone();
            }
            Ok(())
        })
    }

    fn delete_by_id(&self, id: TodoIdentifier) -> AsyncIO<WorkflowResult<()>> {
        self.with_state(move |state| {
            state.check("delete_by_id")?;
            state.todos.retain(|todo| todo.id != id);
            Ok(())
        })
    }

    fn select_all(&self) -> AsyncIO<WorkflowResult<Vec<Todo>>> {
        self.with_state(|state| {
            state.check("select_all")?;
            Ok(state.todos.clone())
        })
    }

    fn backend_name(&self) -> &'static str {
        "fake"
    }
}

// =============================================================================
// FakeBreakdown
// =============================================================================

pub struct FakeBreakdown {
    result: WorkflowResult<Vec<AiTask>>,
    goals: Mutex<Vec<String>>,
}

impl FakeBreakdown {
    pub fn returning(tasks: Vec<AiTask>) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(tasks),
            goals: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: WorkflowError) -> Arc<Self> {
        Arc::new(Self {
            result: Err(error),
            goals: Mutex::new(Vec::new()),
        })
    }

    pub fn received_goals(&self) -> Vec<String> {
        self.goals.lock().unwrap().clone()
    }
}

impl TaskBreakdown for FakeBreakdown {
    fn breakdown(&self, goal: String) -> AsyncIO<WorkflowResult<Vec<AiTask>>> {
        self.goals.lock().unwrap().push(goal);
        AsyncIO::pure(self.result.clone())
    }
}
