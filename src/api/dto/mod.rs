//! Request/response DTOs for the REST API.

pub mod reading_dto;

pub use reading_dto::{HealthResponse, UploadResponse};
