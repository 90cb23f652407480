//! Stored document models.

use serde::{Deserialize, Serialize};

/// A single gauge reading as stored in the `readings` collection.
///
/// Created once per successful upload; never mutated, never deleted by
/// this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadingRecord {
    /// Moment the reading was taken, ISO-8601 in UTC.
    pub timestamp: String,
    /// Pressure value reported by the extractor. Always finite.
    pub pressure: f64,
}
