use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use listy_domain::Todo;

use super::parse_identifier;
use crate::dto::{CreateTodoRequest, Envelope, UpdateTodoRequest};
use crate::errors::ApiError;
use crate::state::AppState;

type TodoResponse = Json<Envelope<Todo>>;
type TodosResponse = Json<Envelope<Vec<Todo>>>;

// =============================================================================
// Query Handlers
// =============================================================================

pub async fn get_todos(State(state): State<AppState>) -> Result<TodosResponse, ApiError> {
    let todos = state.todos.list_all().await?;
    Ok(Json(Envelope::ok(todos)))
}

pub async fn get_pending_todos(State(state): State<AppState>) -> Result<TodosResponse, ApiError> {
    let todos = state.todos.list_pending().await?;
    Ok(Json(Envelope::ok(todos)))
}

pub async fn get_completed_todos(
    State(state): State<AppState>,
) -> Result<TodosResponse, ApiError> {
    let todos = state.todos.list_completed().await?;
    Ok(Json(Envelope::ok(todos)))
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<TodoResponse, ApiError> {
    let id = parse_identifier(&id)?;
    let todo = state.todos.get_by_id(id).await?;
    Ok(Json(Envelope::ok(todo)))
}

// =============================================================================
// Command Handlers
// =============================================================================

pub async fn create_todo(
    State(state): State<AppState>,
    body: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<(StatusCode, TodoResponse), ApiError> {
    let Json(request) = body?;
    let todo = state.todos.create(request.into_new_todo()?).await?;
    Ok((StatusCode::CREATED, Json(Envelope::ok(todo))))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<TodoResponse, ApiError> {
    let id = parse_identifier(&id)?;
    let Json(request) = body?;
    let todo = state.todos.update(id, request.into()).await?;
    Ok(Json(Envelope::ok(todo)))
}

pub async fn toggle_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<TodoResponse, ApiError> {
    let id = parse_identifier(&id)?;
    let todo = state.todos.toggle(id).await?;
    Ok(Json(Envelope::ok(todo)))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, ApiError> {
    let id = parse_identifier(&id)?;
    state.todos.delete(id).await?;
    Ok(Json(Envelope::acknowledged("Todo deleted successfully")))
}
