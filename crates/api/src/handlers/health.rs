use axum::Json;
use axum::extract::State;

use crate::dto::{Envelope, HealthResponse};
use crate::state::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Health Check Handler
// =============================================================================

/// Liveness check. Does not touch the store.
pub async fn health_check(State(state): State<AppState>) -> Json<Envelope<HealthResponse>> {
    tracing::trace!(backend = state.backend_name(), "health check");
    Json(Envelope::ok(HealthResponse::healthy(VERSION)))
}
