//! Generic HTTP document backend.
//!
//! Talks to a plain document endpoint:
//! - `GET {base}/{id}` answers `{ "id", "data" }`, or 404 for an unknown room
//! - `POST {base}` with `{ "id", "data" }` creates a record
//! - `PUT {base}/{id}` with `{ "id", "data" }` replaces a record

use crate::error::{StoreError, StoreResult};
use crate::record::{SceneDocument, StoredScene};
use crate::store::SceneStore;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use scenevault_types::RoomId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// HTTP document backend configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpStoreConfig {
    /// Base URL of the document endpoint (e.g. `http://localhost:4000/whiteboards`).
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

pub(crate) fn default_timeout_secs() -> u64 {
    30
}

impl Default for HttpStoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/whiteboards".to_string(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

/// Scene store backed by a generic HTTP document endpoint.
pub struct HttpSceneStore {
    config: HttpStoreConfig,
    client: Client,
}

impl HttpSceneStore {
    /// Creates a new HTTP store.
    pub fn new(config: HttpStoreConfig) -> StoreResult<Self> {
        if config.base_url.is_empty() {
            return Err(StoreError::Config("HTTP store base URL is empty".to_string()));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &HttpStoreConfig {
        &self.config
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    fn document_url(&self, room: &RoomId) -> String {
        format!("{}/{}", self.base(), room)
    }
}

/// Maps a write response to the uniform result, consuming its body.
pub(crate) async fn check_write(response: Response) -> StoreResult<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::NOT_FOUND => Err(StoreError::NotFound {
            status: status.as_u16(),
        }),
        StatusCode::CONFLICT | StatusCode::PRECONDITION_FAILED => Err(StoreError::Conflict(body)),
        _ => Err(StoreError::Status {
            status: status.as_u16(),
            body,
        }),
    }
}

#[async_trait]
impl SceneStore for HttpSceneStore {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    async fn get(&self, room: &RoomId) -> StoreResult<Option<StoredScene>> {
        debug!(room = %room, "fetching scene document");

        let response = self
            .client
            .get(self.document_url(room))
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let document: SceneDocument = serde_json::from_str(&body)?;
        Ok(document.data)
    }

    async fn create(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()> {
        debug!(room = %room, version = scene.scene_version, "creating scene document");

        let response = self
            .client
            .post(self.base())
            .json(&SceneDocument::new(room.as_str(), scene.clone()))
            .send()
            .await?;
        check_write(response).await
    }

    async fn update(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()> {
        debug!(room = %room, version = scene.scene_version, "updating scene document");

        let response = self
            .client
            .put(self.document_url(room))
            .json(&SceneDocument::new(room.as_str(), scene.clone()))
            .send()
            .await?;
        check_write(response).await
    }
}
