//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::ReadingService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reading service for the upload pipeline and storage status.
    pub reading_service: Arc<ReadingService>,
}
