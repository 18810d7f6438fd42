use axum::Json;
use axum::extract::{Path, State};
use listy_domain::{ListIdentifier, Todo};

use crate::dto::Envelope;
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// List Handlers
// =============================================================================

/// Todos on one list; `main` selects todos without a list.
pub async fn get_todos_by_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
) -> Result<Json<Envelope<Vec<Todo>>>, ApiError> {
    let selector = ListIdentifier::from_selector(&list_id);
    let todos = state.todos.list_by_list(selector.as_ref()).await?;
    Ok(Json(Envelope::ok(todos)))
}

pub async fn get_lists(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<ListIdentifier>>>, ApiError> {
    let lists = state.todos.list_distinct_list_ids().await?;
    Ok(Json(Envelope::ok(lists)))
}
