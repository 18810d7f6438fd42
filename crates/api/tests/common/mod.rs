//! Router fixtures for the HTTP tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use lambars::effect::AsyncIO;
use listy_api::routes::{cors_layer, create_router};
use listy_api::state::AppState;
use listy_domain::{AiTask, Todo, TodoIdentifier};
use listy_infrastructure::adapters::InMemoryTodoStore;
use listy_workflow::{TaskBreakdown, TodoStore, WorkflowError, WorkflowResult};
use serde_json::Value;
use tower::ServiceExt;

// =============================================================================
// Fakes
// =============================================================================

/// Breakdown service with a canned answer.
pub struct ScriptedBreakdown {
    reply: WorkflowResult<Vec<AiTask>>,
}

impl ScriptedBreakdown {
    pub fn returning(texts: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(texts.iter().copied().map(AiTask::new).collect()),
        })
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(WorkflowError::upstream(message)),
        })
    }
}

impl TaskBreakdown for ScriptedBreakdown {
    fn breakdown(&self, _goal: String) -> AsyncIO<WorkflowResult<Vec<AiTask>>> {
        AsyncIO::pure(self.reply.clone())
    }
}

/// Store whose writes always fail.
pub struct ReadOnlyStore;

impl TodoStore for ReadOnlyStore {
    fn insert(&self, _todo: Todo) -> AsyncIO<WorkflowResult<()>> {
        AsyncIO::pure(Err(WorkflowError::storage("insert", "read-only")))
    }

    fn update_by_id(&self, _id: TodoIdentifier, _todo: Todo) -> AsyncIO<WorkflowResult<()>> {
        AsyncIO::pure(Err(WorkflowError::storage("update_by_id", "read-only")))
    }

    fn delete_by_id(&self, _id: TodoIdentifier) -> AsyncIO<WorkflowResult<()>> {
        AsyncIO::pure(Err(WorkflowError::storage("delete_by_id", "read-only")))
    }

    fn select_all(&self) -> AsyncIO<WorkflowResult<Vec<Todo>>> {
        AsyncIO::pure(Ok(Vec::new()))
    }

    fn backend_name(&self) -> &'static str {
        "read-only"
    }
}

// =============================================================================
// Router Builders
// =============================================================================

pub fn router_with(store: Arc<dyn TodoStore>, breakdown: Arc<dyn TaskBreakdown>) -> Router {
    create_router(AppState::new(store, breakdown), cors_layer(None))
}

pub fn router() -> Router {
    router_with(
        Arc::new(InMemoryTodoStore::new()),
        ScriptedBreakdown::returning(&["Book venue", "Send invites"]),
    )
}

pub fn router_seeded(todos: Vec<Todo>) -> Router {
    router_with(
        Arc::new(InMemoryTodoStore::with_todos(todos)),
        ScriptedBreakdown::returning(&[]),
    )
}

// =============================================================================
// Request Helpers
// =============================================================================

/// Sends one request and decodes the JSON body.
pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    send(router, Method::GET, uri, None).await
}

pub async fn post(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, Method::POST, uri, Some(body)).await
}

pub async fn send_raw(router: &Router, method: Method, uri: &str, raw: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(raw.to_string()))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}
