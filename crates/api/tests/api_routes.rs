//! End-to-end HTTP behaviour of the router over the in-memory store.

mod common;

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use common::{
    ReadOnlyStore, ScriptedBreakdown, get, post, router, router_seeded, router_with, send,
    send_raw,
};
use listy_domain::{ListIdentifier, Todo, TodoIdentifier};
use listy_infrastructure::adapters::InMemoryTodoStore;
use rstest::rstest;
use serde_json::json;

fn seeded() -> Vec<Todo> {
    let mut done = Todo::new(TodoIdentifier::new(2), "Walk dog");
    done.mark_complete();
    vec![
        Todo::new(TodoIdentifier::new(1), "Buy milk"),
        done,
        Todo::new(TodoIdentifier::new(3), "Book flights")
            .with_list(Some(ListIdentifier::new("travel"))),
    ]
}

fn ids(body: &serde_json::Value) -> Vec<u64> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|todo| todo["id"].as_u64().unwrap())
        .collect()
}

// =============================================================================
// Health
// =============================================================================

#[rstest]
#[tokio::test]
async fn health_reports_service() {
    let (status, body) = get(&router(), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["service"], "listy-api");
    assert!(body["data"]["version"].is_string());
}

// =============================================================================
// Queries
// =============================================================================

mod queries {
    use super::*;

    #[rstest]
    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let (status, body) = get(&router(), "/api/todos").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "data": []}));
    }

    #[rstest]
    #[case("/api/todos", vec![1, 2, 3])]
    #[case("/api/todos/pending", vec![1, 3])]
    #[case("/api/todos/completed", vec![2])]
    #[case("/api/todos/list/main", vec![1, 2])]
    #[case("/api/todos/list/travel", vec![3])]
    #[case("/api/todos/list/unknown", vec![])]
    #[tokio::test]
    async fn filtered_listings(#[case] uri: &str, #[case] expected: Vec<u64>) {
        let (status, body) = get(&router_seeded(seeded()), uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn lists_are_distinct_names() {
        let (status, body) = get(&router_seeded(seeded()), "/api/lists").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!(["travel"]));
    }

    #[rstest]
    #[tokio::test]
    async fn get_by_id() {
        let (status, body) = get(&router_seeded(seeded()), "/api/todos/2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"],
            json!({"id": 2, "item": "Walk dog", "done": true})
        );
    }

    #[rstest]
    #[tokio::test]
    async fn get_missing_is_not_found() {
        let (status, body) = get(&router_seeded(seeded()), "/api/todos/99").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "todo with ID 99 not found");
    }

    #[rstest]
    #[case(Method::GET, "/api/todos/abc")]
    #[case(Method::PUT, "/api/todos/abc")]
    #[case(Method::DELETE, "/api/todos/abc")]
    #[case(Method::PATCH, "/api/todos/abc/toggle")]
    #[case(Method::GET, "/api/todos/-1")]
    #[case(Method::GET, "/api/todos/0")]
    #[tokio::test]
    async fn invalid_id_is_bad_request(#[case] method: Method, #[case] uri: &str) {
        let body = (method == Method::PUT).then(|| json!({"done": true}));

        let (status, body) = send(&router(), method, uri, body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid ID");
    }
}

// =============================================================================
// Commands
// =============================================================================

mod commands {
    use super::*;

    #[rstest]
    #[tokio::test]
    async fn create_returns_created_todo() {
        let app = router();

        let (status, body) = post(&app, "/api/todos", json!({"item": "Buy milk"})).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({"success": true, "data": {"id": 1, "item": "Buy milk", "done": false}})
        );
    }

    #[rstest]
    #[tokio::test]
    async fn create_on_list() {
        let app = router();

        let (_, body) = post(
            &app,
            "/api/todos",
            json!({"item": "Book flights", "list_id": "travel"}),
        )
        .await;

        assert_eq!(body["data"]["list_id"], "travel");
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"item": ""}))]
    #[case(json!({"item": "   "}))]
    #[tokio::test]
    async fn create_without_item_is_bad_request(#[case] payload: serde_json::Value) {
        let (status, body) = post(&router(), "/api/todos", payload).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "'item' must not be empty");
    }

    #[rstest]
    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (status, body) = send_raw(&router(), Method::POST, "/api/todos", "{not json").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[rstest]
    #[tokio::test]
    async fn update_done_keeps_item() {
        let app = router_seeded(seeded());

        let (status, body) = send(&app, Method::PUT, "/api/todos/1", Some(json!({"done": true}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], json!({"id": 1, "item": "Buy milk", "done": true}));
    }

    #[rstest]
    #[tokio::test]
    async fn update_item_keeps_done() {
        let app = router_seeded(seeded());

        let (_, body) = send(
            &app,
            Method::PUT,
            "/api/todos/2",
            Some(json!({"item": "Walk the dog"})),
        )
        .await;

        assert_eq!(body["data"], json!({"id": 2, "item": "Walk the dog", "done": true}));
    }

    #[rstest]
    #[tokio::test]
    async fn update_missing_is_not_found() {
        let (status, _) = send(
            &router(),
            Method::PUT,
            "/api/todos/5",
            Some(json!({"done": true})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn toggle_flips_done() {
        let app = router_seeded(seeded());

        let (status, body) = send(&app, Method::PATCH, "/api/todos/2/toggle", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["done"], false);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_then_delete_again() {
        let app = router_seeded(seeded());

        let (first, body) = send(&app, Method::DELETE, "/api/todos/1", None).await;
        let (second, _) = send(&app, Method::DELETE, "/api/todos/1", None).await;

        assert_eq!(first, StatusCode::OK);
        assert_eq!(
            body,
            json!({"success": true, "message": "Todo deleted successfully"})
        );
        assert_eq!(second, StatusCode::NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn storage_failure_is_internal_error() {
        let app = router_with(Arc::new(ReadOnlyStore), ScriptedBreakdown::returning(&[]));

        let (status, body) = post(&app, "/api/todos", json!({"item": "Buy milk"})).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("read-only"));
    }

    #[rstest]
    #[tokio::test]
    async fn scenario() {
        let app = router();

        post(&app, "/api/todos", json!({"item": "Buy milk"})).await;
        let (_, walk) = post(&app, "/api/todos", json!({"item": "Walk dog"})).await;
        send(&app, Method::PATCH, "/api/todos/1/toggle", None).await;
        let (_, updated) = send(
            &app,
            Method::PUT,
            "/api/todos/2",
            Some(json!({"item": "Walk the dog"})),
        )
        .await;
        send(&app, Method::DELETE, "/api/todos/1", None).await;

        assert_eq!(walk["data"]["id"], 2);
        assert_eq!(updated["data"]["done"], false);
        assert_eq!(get(&app, "/api/todos/1").await.0, StatusCode::NOT_FOUND);
        let (_, all) = get(&app, "/api/todos").await;
        assert_eq!(ids(&all), vec![2]);
    }
}

// =============================================================================
// AI
// =============================================================================

mod ai {
    use super::*;

    #[rstest]
    #[tokio::test]
    async fn breakdown_returns_suggestions() {
        let (status, body) = post(
            &router(),
            "/api/todos/ai/breakdown",
            json!({"goal": "  Plan a party "}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["goal"], "Plan a party");
        assert_eq!(body["data"]["suggested_tasks"][0]["text"], "Book venue");
        assert_eq!(body["data"]["suggested_tasks"][1]["text"], "Send invites");
    }

    #[rstest]
    #[tokio::test]
    async fn breakdown_without_goal_is_bad_request() {
        let (status, body) = post(&router(), "/api/todos/ai/breakdown", json!({"goal": ""})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "'goal' must not be empty");
    }

    #[rstest]
    #[tokio::test]
    async fn breakdown_upstream_failure_is_bad_gateway() {
        let app = router_with(
            Arc::new(InMemoryTodoStore::new()),
            ScriptedBreakdown::failing("AI service timed out"),
        );

        let (status, body) = post(&app, "/api/todos/ai/breakdown", json!({"goal": "Plan"})).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"], "AI service timed out");
    }

    #[rstest]
    #[tokio::test]
    async fn create_adds_tasks_to_list() {
        let app = router();

        let (status, body) = post(
            &app,
            "/api/todos/ai/create",
            json!({
                "tasks": [{"text": "Book venue", "priority": "high"}, {"text": "Send invites"}],
                "list_id": "party"
            }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Created 2 task(s)");
        assert!(body.get("warnings").is_none());
        assert_eq!(ids(&body), vec![1, 2]);
        assert_eq!(body["data"][0]["priority"], "high");
        let (_, party) = get(&app, "/api/todos/list/party").await;
        assert_eq!(ids(&party), vec![1, 2]);
    }

    #[rstest]
    #[tokio::test]
    async fn create_with_no_tasks_is_bad_request() {
        let (status, body) = post(&router(), "/api/todos/ai/create", json!({"tasks": []})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "'tasks' must not be empty");
    }

    #[rstest]
    #[tokio::test]
    async fn create_total_failure_lists_details() {
        let app = router_with(Arc::new(ReadOnlyStore), ScriptedBreakdown::returning(&[]));

        let (status, body) = post(
            &app,
            "/api/todos/ai/create",
            json!({"tasks": [{"text": "Book venue"}]}),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to create any tasks");
        assert!(
            body["details"][0]
                .as_str()
                .unwrap()
                .starts_with("Failed to create task: Book venue - ")
        );
    }
}
