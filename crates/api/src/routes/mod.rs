//! Routing for the Listy API.

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

// =============================================================================
// Router Creation
// =============================================================================

/// Builds the `/api` router with tracing and the given CORS layer.
///
/// # Examples
///
/// ```ignore
/// use listy_api::routes::{cors_layer, create_router};
/// use listy_api::state::AppState;
///
/// let router = create_router(AppState::new(store, breakdown), cors_layer(None));
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, router).await?;
/// ```
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/todos",
            get(handlers::get_todos).post(handlers::create_todo),
        )
        .route("/todos/pending", get(handlers::get_pending_todos))
        .route("/todos/completed", get(handlers::get_completed_todos))
        .route("/todos/list/{list_id}", get(handlers::get_todos_by_list))
        .route("/todos/ai/breakdown", post(handlers::ai_breakdown))
        .route("/todos/ai/create", post(handlers::ai_create))
        .route(
            "/todos/{id}",
            get(handlers::get_todo)
                .put(handlers::update_todo)
                .delete(handlers::delete_todo),
        )
        .route("/todos/{id}/toggle", patch(handlers::toggle_todo))
        .route("/lists", get(handlers::get_lists));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS for browser clients. `None`, `*` or an unparsable origin allows any
/// origin.
#[must_use]
pub fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    match origin.filter(|origin| *origin != "*").map(HeaderValue::from_str) {
        Some(Ok(origin)) => layer.allow_origin(origin),
        Some(Err(error)) => {
            tracing::warn!(error = %error, "invalid CORS_ORIGIN, allowing any origin");
            layer.allow_origin(Any)
        }
        None => layer.allow_origin(Any),
    }
}

// =============================================================================
// Tests
// =============================================================================
