//! Persistence layer: document store for gauge readings.
//!
//! Provides the [`DocumentStore`] trait for appending JSON documents to a
//! named collection. The production implementation keeps documents as
//! JSONB rows in PostgreSQL via `sqlx`; an in-memory implementation backs
//! the test suite. Both are reached only through the trait object, and
//! the handle is optional for the lifetime of the process: when the store
//! cannot be initialized at startup the service runs in a degraded,
//! storage-less mode.

pub mod memory;
pub mod models;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::error::ApiError;
use self::postgres::PostgresStore;

/// Name of the collection that gauge readings are appended to.
pub const READINGS_COLLECTION: &str = "readings";

/// Append-only document store.
///
/// Writes are independent and uncoordinated; the store itself is
/// responsible for concurrent-write safety. No read-your-writes guarantee
/// is offered and none is needed by this service.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Appends a new document to the named collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] when the store is reachable but the
    /// write fails. Callers decide whether that failure is fatal.
    async fn add_document(
        &self,
        collection: &str,
        document: &serde_json::Value,
    ) -> Result<(), ApiError>;
}

/// Shared, optional handle to the document store.
///
/// Set once at startup and read-only thereafter; `None` means the service
/// runs without persistence.
pub type StoreHandle = Option<Arc<dyn DocumentStore>>;

/// Initializes the document store exactly once at startup.
///
/// On any failure (missing credentials, unreachable store) the error is
/// logged and `None` is returned: startup proceeds and every upload still
/// succeeds, with writes skipped.
pub async fn initialize_store(config: &AppConfig) -> StoreHandle {
    match PostgresStore::connect(config).await {
        Ok(store) => {
            tracing::info!("document store initialized");
            Some(Arc::new(store))
        }
        Err(e) => {
            tracing::error!(error = %e, "document store unavailable, writes will be skipped");
            None
        }
    }
}
