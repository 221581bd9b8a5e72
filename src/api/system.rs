use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use super::{AppState, HealthResponse, messages};

/// `GET /api/health`
///
/// Fixed payload. Liveness only; the database is not consulted.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        message: messages::HEALTH_OK.to_string(),
    })
}

/// `GET /api/metrics`
pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.prometheus_handle.as_ref() {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "Metrics not enabled or failed to initialize".to_string(),
        ),
    }
}
