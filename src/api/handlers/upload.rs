//! Gauge image upload handler.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::UploadResponse;
use crate::app_state::AppState;
use crate::error::{ApiError, ErrorResponse};

/// `POST /upload-image` — Ingest a pressure gauge photo.
///
/// Reads the `file` multipart field (any format, any length including
/// zero), runs the reading pipeline, and returns the reading together
/// with the base64-encoded original image.
///
/// # Errors
///
/// Returns [`ApiError::MissingFileField`] when no `file` field is present
/// and [`ApiError::InvalidMultipart`] when the body cannot be parsed.
#[utoipa::path(
    post,
    path = "/upload-image",
    tag = "Readings",
    summary = "Upload a gauge image",
    description = "Accepts a multipart `file` field, derives a pressure reading, persists it when storage is available, and echoes the image back base64-encoded.",
    responses(
        (status = 200, description = "Reading produced", body = UploadResponse),
        (status = 422, description = "Missing `file` field", body = ErrorResponse),
        (status = 500, description = "Processing failure", body = ErrorResponse),
    )
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let image = read_file_field(&mut multipart).await?;

    let reading = state.reading_service.ingest(&image).await?;

    Ok((StatusCode::OK, Json(UploadResponse::from(reading))))
}

/// Extracts the bytes of the `file` multipart field.
///
/// Fields with other names are skipped; the first field named `file`
/// wins. The extractor is never invoked when the field is absent.
async fn read_file_field(multipart: &mut Multipart) -> Result<Vec<u8>, ApiError> {
    loop {
        let field = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::InvalidMultipart(e.to_string()))?;

        let Some(field) = field else {
            return Err(ApiError::MissingFileField);
        };

        if field.name() == Some("file") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ApiError::InvalidMultipart(e.to_string()))?;
            return Ok(bytes.to_vec());
        }
    }
}

/// Reading routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new().route("/upload-image", post(upload_image))
}
