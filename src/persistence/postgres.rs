//! PostgreSQL implementation of the document store.
//!
//! Documents are kept as JSONB rows in a single `documents` table keyed by
//! collection name, which gives the append-only, schema-less semantics the
//! service needs without per-collection DDL.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use super::DocumentStore;
use crate::config::AppConfig;
use crate::error::ApiError;

/// Shape of the local key file checked before the environment.
#[derive(Debug, Deserialize)]
struct StoreKeyFile {
    database_url: String,
}

/// PostgreSQL-backed document store using `sqlx::PgPool`.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Connects to PostgreSQL and ensures the `documents` table exists.
    ///
    /// The connection string is resolved from the local key file when it
    /// is present, otherwise from the `DATABASE_URL` environment setting.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Store`] when no credentials can be resolved or
    /// the connection attempt fails.
    pub async fn connect(config: &AppConfig) -> Result<Self, ApiError> {
        let url = resolve_database_url(config)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
            .connect(&url)
            .await
            .map_err(|e| ApiError::Store(e.to_string()))?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS documents (\
                 id BIGSERIAL PRIMARY KEY, \
                 collection TEXT NOT NULL, \
                 document JSONB NOT NULL, \
                 created_at TIMESTAMPTZ NOT NULL DEFAULT now()\
             )",
        )
        .execute(&pool)
        .await
        .map_err(|e| ApiError::Store(e.to_string()))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl DocumentStore for PostgresStore {
    async fn add_document(
        &self,
        collection: &str,
        document: &serde_json::Value,
    ) -> Result<(), ApiError> {
        sqlx::query("INSERT INTO documents (collection, document) VALUES ($1, $2)")
            .bind(collection)
            .bind(document)
            .execute(&self.pool)
            .await
            .map_err(|e| ApiError::Store(e.to_string()))?;

        Ok(())
    }
}

/// Resolves the store connection string.
///
/// Resolution order: (1) the local key file if it exists, (2) the
/// `DATABASE_URL` environment value captured in the config.
fn resolve_database_url(config: &AppConfig) -> Result<String, ApiError> {
    if config.store_key_file.exists() {
        let raw = std::fs::read_to_string(&config.store_key_file)
            .map_err(|e| ApiError::Store(format!("reading store key file: {e}")))?;
        let key: StoreKeyFile = serde_json::from_str(&raw)
            .map_err(|e| ApiError::Store(format!("parsing store key file: {e}")))?;
        return Ok(key.database_url);
    }

    config
        .database_url
        .clone()
        .ok_or_else(|| ApiError::Store("no store credentials configured".to_string()))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use super::*;

    fn config_with(key_file: PathBuf, database_url: Option<String>) -> AppConfig {
        AppConfig {
            listen_addr: "127.0.0.1:8080".parse().unwrap_or_else(|_| {
                panic!("valid addr");
            }),
            store_key_file: key_file,
            database_url,
            database_max_connections: 5,
            database_connect_timeout_secs: 5,
        }
    }

    #[test]
    fn key_file_takes_precedence_over_env() {
        let file = tempfile::NamedTempFile::new();
        let Ok(mut file) = file else {
            panic!("temp file");
        };
        let write = file.write_all(br#"{"database_url": "postgres://from-file/db"}"#);
        assert!(write.is_ok());

        let config = config_with(
            file.path().to_path_buf(),
            Some("postgres://from-env/db".to_string()),
        );
        let url = resolve_database_url(&config);
        let Ok(url) = url else {
            panic!("expected url from key file");
        };
        assert_eq!(url, "postgres://from-file/db");
    }

    #[test]
    fn falls_back_to_env_url_without_key_file() {
        let config = config_with(
            PathBuf::from("does-not-exist.json"),
            Some("postgres://from-env/db".to_string()),
        );
        let url = resolve_database_url(&config);
        let Ok(url) = url else {
            panic!("expected url from env");
        };
        assert_eq!(url, "postgres://from-env/db");
    }

    #[test]
    fn errors_when_no_credentials_available() {
        let config = config_with(PathBuf::from("does-not-exist.json"), None);
        assert!(resolve_database_url(&config).is_err());
    }

    #[test]
    fn malformed_key_file_is_an_error() {
        let file = tempfile::NamedTempFile::new();
        let Ok(mut file) = file else {
            panic!("temp file");
        };
        let write = file.write_all(b"not json");
        assert!(write.is_ok());

        let config = config_with(file.path().to_path_buf(), None);
        assert!(resolve_database_url(&config).is_err());
    }
}
