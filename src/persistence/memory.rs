//! In-memory implementation of the document store.
//!
//! Backs the test suite and storage-less local experimentation. Documents
//! live in a mutex-guarded vector for the lifetime of the process.

use std::sync::Mutex;

use async_trait::async_trait;

use super::DocumentStore;
use crate::error::ApiError;

/// Document store that appends into process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<Vec<(String, serde_json::Value)>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every `(collection, document)` pair written so far.
    #[must_use]
    pub fn documents(&self) -> Vec<(String, serde_json::Value)> {
        self.documents
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn add_document(
        &self,
        collection: &str,
        document: &serde_json::Value,
    ) -> Result<(), ApiError> {
        let mut guard = self
            .documents
            .lock()
            .map_err(|_| ApiError::Store("memory store poisoned".to_string()))?;
        guard.push((collection.to_string(), document.clone()));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn appends_are_observable() {
        let store = MemoryStore::new();
        let doc = serde_json::json!({"pressure": 0.0});
        let result = store.add_document("readings", &doc).await;
        assert!(result.is_ok());

        let docs = store.documents();
        assert_eq!(docs.len(), 1);
        let Some((collection, stored)) = docs.first() else {
            panic!("expected one document");
        };
        assert_eq!(collection, "readings");
        assert_eq!(stored, &doc);
    }
}
