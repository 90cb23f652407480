//! DTOs for the upload and health endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::service::GaugeReading;

/// Response body for a successful image upload.
///
/// The `image` field duplicates the uploaded bytes in base64 for the
/// caller's convenience; it is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UploadResponse {
    /// Moment the reading was taken, ISO-8601 in UTC.
    pub timestamp: String,
    /// Pressure value derived from the image.
    pub pressure: f64,
    /// The uploaded image, base64-encoded.
    pub image: String,
    /// Always `"success"` on the 200 path.
    pub status: String,
}

impl From<GaugeReading> for UploadResponse {
    fn from(reading: GaugeReading) -> Self {
        Self {
            timestamp: reading.timestamp,
            pressure: reading.pressure,
            image: reading.image_base64,
            status: "success".to_string(),
        }
    }
}

/// Response body for the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Human-readable service banner.
    pub message: String,
    /// Crate version.
    pub version: String,
    /// `"available"` or `"unavailable"`, reflecting the store handle
    /// obtained at startup.
    pub storage: String,
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_carries_success_status() {
        let response = UploadResponse::from(GaugeReading {
            timestamp: "2026-08-26T12:00:00+00:00".to_string(),
            pressure: 0.0,
            image_base64: "aGVsbG8=".to_string(),
        });
        assert_eq!(response.status, "success");
        assert_eq!(response.image, "aGVsbG8=");
    }
}
