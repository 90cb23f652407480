//! Service layer: orchestration between HTTP handlers, the extractor,
//! and the document store.

pub mod reading_service;

pub use reading_service::{GaugeReading, ReadingService};
