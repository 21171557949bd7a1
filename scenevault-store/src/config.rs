//! Backend selection.
//!
//! The backend is chosen once at startup from configuration; the sync layer
//! only ever sees an `Arc<dyn SceneStore>`.

use crate::collection::{CollectionSceneStore, CollectionStoreConfig};
use crate::error::{StoreError, StoreResult};
use crate::http::{HttpSceneStore, HttpStoreConfig};
use crate::memory::MemorySceneStore;
use crate::store::SceneStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Environment variable selecting the backend (`http`, `collection`, `memory`).
pub const ENV_BACKEND: &str = "SCENEVAULT_STORE_BACKEND";
/// Environment variable with the backend base URL.
pub const ENV_URL: &str = "SCENEVAULT_STORE_URL";
/// Environment variable with the collection backend bucket.
pub const ENV_BUCKET: &str = "SCENEVAULT_STORE_BUCKET";
/// Environment variable with the collection backend collection.
pub const ENV_COLLECTION: &str = "SCENEVAULT_STORE_COLLECTION";
/// Environment variable with the collection backend bearer token.
pub const ENV_TOKEN: &str = "SCENEVAULT_STORE_TOKEN";
/// Environment variable with the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "SCENEVAULT_STORE_TIMEOUT_SECS";

/// Which scene store to use, and how to reach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "snake_case")]
pub enum StoreConfig {
    /// Generic HTTP document endpoint.
    Http(HttpStoreConfig),
    /// Bucket/collection record service.
    Collection(CollectionStoreConfig),
    /// In-process store.
    Memory,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Http(HttpStoreConfig::default())
    }
}

impl StoreConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, falling back to defaults
    /// for every unset variable.
    pub fn from_lookup<F>(lookup: F) -> StoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                StoreError::Config(format!("{ENV_TIMEOUT_SECS} is not a number: {e}"))
            })?),
            None => None,
        };

        let backend = lookup(ENV_BACKEND).unwrap_or_else(|| "http".to_string());
        match backend.trim().to_ascii_lowercase().as_str() {
            "http" => {
                let mut config = HttpStoreConfig::default();
                if let Some(url) = lookup(ENV_URL) {
                    config.base_url = url;
                }
                if let Some(secs) = timeout {
                    config.request_timeout_secs = secs;
                }
                Ok(StoreConfig::Http(config))
            }
            "collection" => {
                let mut config = CollectionStoreConfig::default();
                if let Some(url) = lookup(ENV_URL) {
                    config.base_url = url;
                }
                if let Some(bucket) = lookup(ENV_BUCKET) {
                    config.bucket = bucket;
                }
                if let Some(collection) = lookup(ENV_COLLECTION) {
                    config.collection = collection;
                }
                config.auth_token = lookup(ENV_TOKEN).filter(|t| !t.is_empty());
                if let Some(secs) = timeout {
                    config.request_timeout_secs = secs;
                }
                Ok(StoreConfig::Collection(config))
            }
            "memory" => Ok(StoreConfig::Memory),
            other => Err(StoreError::Config(format!(
                "unknown store backend {other:?} in {ENV_BACKEND}"
            ))),
        }
    }

    /// Returns the backend name this configuration selects.
    pub fn backend_name(&self) -> &'static str {
        match self {
            StoreConfig::Http(_) => "http",
            StoreConfig::Collection(_) => "collection",
            StoreConfig::Memory => "memory",
        }
    }
}

/// Builds the configured backend.
pub fn connect(config: &StoreConfig) -> StoreResult<Arc<dyn SceneStore>> {
    let store: Arc<dyn SceneStore> = match config {
        StoreConfig::Http(http) => {
            info!(base_url = %http.base_url, "using HTTP document store");
            Arc::new(HttpSceneStore::new(http.clone())?)
        }
        StoreConfig::Collection(collection) => {
            info!(
                base_url = %collection.base_url,
                bucket = %collection.bucket,
                collection = %collection.collection,
                "using collection record store"
            );
            Arc::new(CollectionSceneStore::new(collection.clone())?)
        }
        StoreConfig::Memory => {
            info!("using in-memory scene store");
            Arc::new(MemorySceneStore::new())
        }
    };
    Ok(store)
}
