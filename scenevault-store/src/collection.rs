//! Structured-collection backend.
//!
//! Stores one record per room inside a bucket/collection hierarchy:
//! `{base}/buckets/{bucket}/collections/{collection}/records/{id}`.
//! Record bodies are wrapped as `{ "data": { "id", ...fields } }` and the
//! service may add its own bookkeeping fields, which are ignored.

use crate::error::{StoreError, StoreResult};
use crate::http::{check_write, default_timeout_secs};
use crate::record::StoredScene;
use crate::store::SceneStore;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use scenevault_types::RoomId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Collection backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionStoreConfig {
    /// Base URL of the collection service API (e.g. `http://localhost:8888/v1`).
    pub base_url: String,
    /// Bucket holding the collection.
    pub bucket: String,
    /// Collection holding one record per room.
    pub collection: String,
    /// Optional bearer token.
    #[serde(default)]
    pub auth_token: Option<String>,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for CollectionStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8888/v1".to_string(),
            bucket: "scenevault".to_string(),
            collection: "scenes".to_string(),
            auth_token: None,
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct RecordEnvelope<T> {
    data: T,
}

#[derive(Debug, Serialize, Deserialize)]
struct SceneRecord {
    id: String,
    #[serde(flatten)]
    scene: StoredScene,
}

/// Scene store backed by a bucket/collection record service.
pub struct CollectionSceneStore {
    config: CollectionStoreConfig,
    client: Client,
}

impl CollectionSceneStore {
    /// Creates a new collection store.
    pub fn new(config: CollectionStoreConfig) -> StoreResult<Self> {
        if config.base_url.is_empty() {
            return Err(StoreError::Config(
                "collection store base URL is empty".to_string(),
            ));
        }
        if config.bucket.is_empty() || config.collection.is_empty() {
            return Err(StoreError::Config(
                "collection store needs a bucket and a collection".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CollectionStoreConfig {
        &self.config
    }

    fn records_url(&self) -> String {
        format!(
            "{}/buckets/{}/collections/{}/records",
            self.config.base_url.trim_end_matches('/'),
            self.config.bucket,
            self.config.collection
        )
    }

    fn record_url(&self, room: &RoomId) -> String {
        format!("{}/{}", self.records_url(), room)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.auth_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn envelope(room: &RoomId, scene: &StoredScene) -> RecordEnvelope<SceneRecord> {
        RecordEnvelope {
            data: SceneRecord {
                id: room.to_string(),
                scene: scene.clone(),
            },
        }
    }

    /// Fetches the raw record for a room.
    ///
    /// Unlike [`SceneStore::get`], a missing record is an error here:
    /// [`StoreError::NotFound`] carrying the service's status code.
    pub async fn fetch_record(&self, room: &RoomId) -> StoreResult<StoredScene> {
        let response = self
            .authorize(self.client.get(self.record_url(room)))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let envelope: RecordEnvelope<SceneRecord> = serde_json::from_str(&body)?;
        Ok(envelope.data.scene)
    }
}

#[async_trait]
impl SceneStore for CollectionSceneStore {
    fn backend_name(&self) -> &'static str {
        "collection"
    }

    async fn get(&self, room: &RoomId) -> StoreResult<Option<StoredScene>> {
        debug!(room = %room, "fetching scene record");
        match self.fetch_record(room).await {
            Ok(scene) => Ok(Some(scene)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn create(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()> {
        debug!(room = %room, version = scene.scene_version, "creating scene record");

        let response = self
            .authorize(self.client.post(self.records_url()))
            .json(&Self::envelope(room, scene))
            .send()
            .await?;
        check_write(response).await
    }

    async fn update(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()> {
        debug!(room = %room, version = scene.scene_version, "updating scene record");

        let response = self
            .authorize(self.client.put(self.record_url(room)))
            .json(&Self::envelope(room, scene))
            .send()
            .await?;
        check_write(response).await
    }
}
