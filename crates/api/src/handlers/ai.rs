use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use listy_domain::Todo;

use crate::dto::{AiBreakdownRequest, AiBreakdownResponse, AiCreateRequest, Envelope};
use crate::errors::ApiError;
use crate::state::AppState;

// =============================================================================
// Breakdown Handler
// =============================================================================

pub async fn ai_breakdown(
    State(state): State<AppState>,
    body: Result<Json<AiBreakdownRequest>, JsonRejection>,
) -> Result<Json<Envelope<AiBreakdownResponse>>, ApiError> {
    let Json(request) = body?;
    let suggested_tasks = state.planner.breakdown(&request.goal).await?;
    Ok(Json(Envelope::ok(AiBreakdownResponse {
        goal: request.goal.trim().to_string(),
        suggested_tasks,
    })))
}

// =============================================================================
// Create Handler
// =============================================================================

/// Creates one todo per accepted suggestion.
///
/// Partial failures still answer 201 and list the failed tasks under
/// `warnings`; if nothing could be created the response is a 500 with the
/// failures under `details`.
pub async fn ai_create(
    State(state): State<AppState>,
    body: Result<Json<AiCreateRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<Vec<Todo>>>), ApiError> {
    let Json(request) = body?;
    let list_id = request.list_identifier();
    let outcome = state
        .planner
        .create_suggested(&state.todos, request.tasks, list_id)
        .await?;

    if outcome.is_total_failure() {
        return Err(ApiError::internal(
            "Failed to create any tasks",
            outcome.failures,
        ));
    }

    let message = format!("Created {} task(s)", outcome.created.len());
    let envelope = Envelope::ok(outcome.created)
        .with_message(message)
        .with_warnings(outcome.failures);
    Ok((StatusCode::CREATED, Json(envelope)))
}
