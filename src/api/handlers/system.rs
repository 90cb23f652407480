//! System endpoints: health check.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::HealthResponse;
use crate::app_state::AppState;

/// `GET /` — Service health status.
///
/// Always responds 200 regardless of persistence state; the `storage`
/// field makes a degraded startup observable to probes.
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    summary = "Health check",
    description = "Returns service liveness, version, and document-store availability.",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let storage = if state.reading_service.storage_available() {
        "available"
    } else {
        "unavailable"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            message: "Pressure Watcher API is running".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            storage: storage.to_string(),
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(health_handler))
}
