//! Gauge-reading extraction.
//!
//! [`ReadingExtractor`] is the single seam through which a real
//! image-analysis algorithm (needle-angle estimation, classical CV, or a
//! learned model) can be dropped in later. The rest of the service only
//! ever sees the trait, so swapping the implementation changes nothing in
//! the upload contract.

/// Maps raw image bytes to a pressure value.
///
/// Implementations must be pure and total: the same bytes always yield
/// the same value, and every byte sequence — including the empty one —
/// yields a finite float.
pub trait ReadingExtractor: Send + Sync + std::fmt::Debug {
    /// Derives a pressure reading from raw image bytes.
    fn extract(&self, image: &[u8]) -> f64;
}

/// Placeholder extractor used until a real gauge-reading algorithm exists.
///
/// Always reports `0.0` regardless of input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubExtractor;

impl ReadingExtractor for StubExtractor {
    fn extract(&self, _image: &[u8]) -> f64 {
        0.0
    }
}
