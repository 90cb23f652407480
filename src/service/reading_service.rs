//! Upload pipeline orchestration.
//!
//! [`ReadingService`] owns the extractor and the optional store handle and
//! runs the full pipeline for one uploaded image: extract a pressure
//! value, stamp it, encode the image for transport, and persist the
//! reading when storage is available.

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{SecondsFormat, Utc};

use crate::error::ApiError;
use crate::extractor::ReadingExtractor;
use crate::persistence::models::ReadingRecord;
use crate::persistence::{READINGS_COLLECTION, StoreHandle};

/// Result of ingesting one gauge image.
#[derive(Debug, Clone)]
pub struct GaugeReading {
    /// Moment the reading was taken, ISO-8601 in UTC.
    pub timestamp: String,
    /// Pressure value reported by the extractor.
    pub pressure: f64,
    /// The uploaded image, base64-encoded for text-safe transport.
    pub image_base64: String,
}

/// Business logic for gauge image uploads.
///
/// Both collaborators are injected at construction time: the extractor is
/// the swap point for a future real algorithm, and the store handle is
/// `None` when persistence was unavailable at startup.
#[derive(Debug)]
pub struct ReadingService {
    extractor: Arc<dyn ReadingExtractor>,
    store: StoreHandle,
}

impl ReadingService {
    /// Creates a new service with the given extractor and store handle.
    #[must_use]
    pub fn new(extractor: Arc<dyn ReadingExtractor>, store: StoreHandle) -> Self {
        Self { extractor, store }
    }

    /// Whether a document store handle was obtained at startup.
    #[must_use]
    pub fn storage_available(&self) -> bool {
        self.store.is_some()
    }

    /// Runs the upload pipeline for one image.
    ///
    /// Zero-length input is valid. When storage is available one record is
    /// appended to the `readings` collection; a failed write is logged and
    /// does not fail the request. Without storage the write is skipped and
    /// the request still succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Internal`] when the stored record cannot be
    /// serialized. No other step of the pipeline can fail.
    pub async fn ingest(&self, image: &[u8]) -> Result<GaugeReading, ApiError> {
        let pressure = self.extractor.extract(image);
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false);
        let image_base64 = STANDARD.encode(image);

        if let Some(store) = &self.store {
            let record = ReadingRecord {
                timestamp: timestamp.clone(),
                pressure,
            };
            let document = serde_json::to_value(&record)
                .map_err(|e| ApiError::Internal(e.to_string()))?;
            if let Err(e) = store.add_document(READINGS_COLLECTION, &document).await {
                tracing::warn!(error = %e, "failed to persist reading, continuing");
            }
        } else {
            tracing::debug!("no store handle, skipping persistence");
        }

        Ok(GaugeReading {
            timestamp,
            pressure,
            image_base64,
        })
    }
}
