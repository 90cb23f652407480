//! # pressure-watcher
//!
//! Upload-and-store backend for analog pressure gauge images.
//!
//! Clients POST a gauge photo to `/upload-image`; the service derives a
//! pressure reading from the bytes (currently a stub that always reports
//! `0.0`), persists `{timestamp, pressure}` into the `readings` collection
//! of a document store, and echoes the reading plus the base64-encoded
//! image back to the caller. The gauge-reading algorithm is the designated
//! extension point — everything else is a thin coordination layer.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── ReadingService (service/)
//!     │       ├── ReadingExtractor (extractor/)  — stub today
//!     │       └── DocumentStore (persistence/)   — optional at runtime
//!     │
//!     └── PostgreSQL-backed document store
//! ```
//!
//! The store handle is resolved once at startup; when it cannot be
//! obtained the service degrades to a storage-less mode in which uploads
//! still succeed but nothing is persisted.

pub mod api;
pub mod app_state;
pub mod config;
pub mod error;
pub mod extractor;
pub mod persistence;
pub mod service;
