//! In-process scene store.
//!
//! Behaves like the remote backends (create on an existing room conflicts,
//! update on a missing room is not found) without any I/O. Used for local
//! development and tests.

use crate::error::{StoreError, StoreResult};
use crate::record::StoredScene;
use crate::store::SceneStore;
use async_trait::async_trait;
use scenevault_types::RoomId;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Scene store keeping records in memory. Clones share the same records.
#[derive(Clone, Default)]
pub struct MemorySceneStore {
    records: Arc<RwLock<HashMap<RoomId, StoredScene>>>,
    writes: Arc<AtomicU64>,
}

impl MemorySceneStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the record of a room without going through the trait.
    pub async fn snapshot(&self, room: &RoomId) -> Option<StoredScene> {
        self.records.read().await.get(room).cloned()
    }

    /// Returns the number of stored rooms.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if no room has a record.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Returns the number of successful writes (creates plus updates).
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SceneStore for MemorySceneStore {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, room: &RoomId) -> StoreResult<Option<StoredScene>> {
        Ok(self.records.read().await.get(room).cloned())
    }

    async fn create(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(room) {
            return Err(StoreError::Conflict(format!("room {room} already exists")));
        }
        records.insert(room.clone(), scene.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn update(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()> {
        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(room) else {
            return Err(StoreError::NotFound { status: 404 });
        };
        *record = scene.clone();
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
