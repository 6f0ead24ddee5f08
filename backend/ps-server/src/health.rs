use crate::AppState;

use ps_db::ProjectRepository;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - static liveness payload for the discovery agent
pub async fn health() -> Response {
    (StatusCode::OK, Json(json!({ "status": "healthy" }))).into_response()
}

/// GET /ready - readiness probe (can the store answer?)
pub async fn readiness(State(state): State<AppState>) -> Response {
    let repo = ProjectRepository::new(state.pool.clone());
    match repo.ping().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ready" }))).into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable" })),
            )
                .into_response()
        }
    }
}
