#![allow(dead_code)]

use async_trait::async_trait;
use scenevault_crypto::{KdfParams, RoomKey};
use scenevault_store::{SceneStore, StoreError, StoreResult, StoredScene};
use scenevault_types::{RoomId, Scene, SceneElement};

/// Fast KDF params for testing (low memory/iterations for speed)
pub fn fast_kdf_params() -> KdfParams {
    KdfParams {
        memory_cost: 1024,
        time_cost: 1,
        parallelism: 1,
    }
}

pub fn key_from_secret(secret: &str) -> RoomKey {
    RoomKey::import_with_params(secret, &fast_kdf_params()).unwrap()
}

pub fn room(id: &str) -> RoomId {
    RoomId::new(id).unwrap()
}

/// A one-element scene whose version is `version` (at least 1).
pub fn scene_with_version(version: u64) -> Scene {
    let mut scene = Scene::new();
    scene.push(
        SceneElement::new("base", "rectangle")
            .with_version(version.max(1))
            .with_property("x", 0)
            .with_property("y", 0),
    );
    scene
}

/// Which store operation should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    Get,
    Create,
    Update,
}

/// Store that fails one operation and delegates the rest.
pub struct FailingStore<S> {
    pub inner: S,
    pub fail_on: FailOn,
}

#[async_trait]
impl<S: SceneStore> SceneStore for FailingStore<S> {
    fn backend_name(&self) -> &'static str {
        "failing"
    }

    async fn get(&self, room: &RoomId) -> StoreResult<Option<StoredScene>> {
        if self.fail_on == FailOn::Get {
            return Err(StoreError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        self.inner.get(room).await
    }

    async fn create(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()> {
        if self.fail_on == FailOn::Create {
            return Err(StoreError::Status {
                status: 500,
                body: "create failed".to_string(),
            });
        }
        self.inner.create(room, scene).await
    }

    async fn update(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()> {
        if self.fail_on == FailOn::Update {
            return Err(StoreError::Status {
                status: 500,
                body: "update failed".to_string(),
            });
        }
        self.inner.update(room, scene).await
    }
}

/// Store whose reads wait until `parties` callers are reading at once, so
/// concurrent saves all fetch before any of them writes.
pub struct GatedStore<S> {
    pub inner: S,
    barrier: tokio::sync::Barrier,
}

impl<S> GatedStore<S> {
    pub fn new(inner: S, parties: usize) -> Self {
        Self {
            inner,
            barrier: tokio::sync::Barrier::new(parties),
        }
    }
}

#[async_trait]
impl<S: SceneStore> SceneStore for GatedStore<S> {
    fn backend_name(&self) -> &'static str {
        "gated"
    }

    async fn get(&self, room: &RoomId) -> StoreResult<Option<StoredScene>> {
        let current = self.inner.get(room).await;
        self.barrier.wait().await;
        current
    }

    async fn create(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()> {
        self.inner.create(room, scene).await
    }

    async fn update(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()> {
        self.inner.update(room, scene).await
    }
}
