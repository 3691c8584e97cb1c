use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub message: &'static str,
}

/// GET /api/health -- liveness probe, no auth, no database round-trip.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        message: "API is running",
    })
}

/// Mount health check routes (intended for merging into `/api`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
