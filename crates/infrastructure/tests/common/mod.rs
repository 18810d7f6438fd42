//! Local HTTP fakes for the remote adapters.
//!
//! Each integration test file is compiled as its own crate, hence the
//! dead-code allowance for helpers only some files use.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{address}")
}

// =============================================================================
// Fake PostgREST
// =============================================================================

pub const API_KEY: &str = "service-key";

#[derive(Clone, Default)]
pub struct FakePostgrest {
    pub rows: Arc<Mutex<Vec<Value>>>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl FakePostgrest {
    pub fn router(&self) -> Router {
        Router::new()
            .route(
                "/rest/v1/todos",
                get(select_rows)
                    .post(insert_row)
                    .patch(update_row)
                    .delete(delete_row),
            )
            .with_state(self.clone())
    }

    pub fn rows(&self) -> Vec<Value> {
        self.rows.lock().unwrap().clone()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    fn record(&self, line: String) {
        self.requests.lock().unwrap().push(line);
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    let api_key = headers.get("apikey").and_then(|value| value.to_str().ok());
    let bearer = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok());
    api_key == Some(API_KEY) && bearer == Some(format!("Bearer {API_KEY}").as_str())
}

fn id_filter(query: &HashMap<String, String>) -> Option<i64> {
    query.get("id")?.strip_prefix("eq.")?.parse().ok()
}

async fn select_rows(
    State(fake): State<FakePostgrest>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    fake.record(format!("GET select={}", query.get("select").cloned().unwrap_or_default()));
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(Value::from("invalid api key"))).into_response();
    }
    Json(Value::Array(fake.rows())).into_response()
}

async fn insert_row(
    State(fake): State<FakePostgrest>,
    headers: HeaderMap,
    Json(row): Json<Value>,
) -> impl IntoResponse {
    fake.record("POST".to_string());
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    fake.rows.lock().unwrap().push(row);
    StatusCode::CREATED
}

async fn update_row(
    State(fake): State<FakePostgrest>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    Json(row): Json<Value>,
) -> impl IntoResponse {
    fake.record(format!("PATCH id={}", query.get("id").cloned().unwrap_or_default()));
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    let Some(id) = id_filter(&query) else {
        return StatusCode::BAD_REQUEST;
    };
    for stored in fake.rows.lock().unwrap().iter_mut() {
        if stored["id"].as_i64() == Some(id) {
            *stored = row.clone();
        }
    }
    StatusCode::NO_CONTENT
}

async fn delete_row(
    State(fake): State<FakePostgrest>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    fake.record(format!("DELETE id={}", query.get("id").cloned().unwrap_or_default()));
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    let Some(id) = id_filter(&query) else {
        return StatusCode::BAD_REQUEST;
    };
    fake.rows
        .lock()
        .unwrap()
        .retain(|stored| stored["id"].as_i64() != Some(id));
    StatusCode::NO_CONTENT
}

// =============================================================================
// Fake chat completions
// =============================================================================

/// Answers every chat-completions request with `status` and `body`.
pub fn chat_completions(status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/v1/chat/completions",
        post(move |Json(_request): Json<Value>| {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

/// A successful completion whose first choice carries `content`.
pub fn completion(content: &str) -> Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content } }
        ]
    })
}
