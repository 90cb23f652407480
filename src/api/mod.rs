//! REST API layer: route handlers, DTOs, and router composition.
//!
//! All endpoints are mounted at the root: `GET /` for liveness and
//! `POST /upload-image` for gauge ingestion.

pub mod dto;
pub mod handlers;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    handlers::routes()
}
