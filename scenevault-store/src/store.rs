//! Scene store abstraction trait.
//!
//! Defines the one interface the sync layer needs from a backend: read,
//! create and update a record addressed by room id.

use crate::error::StoreResult;
use crate::record::StoredScene;
use async_trait::async_trait;
use scenevault_types::RoomId;

/// Abstract key-addressed scene store.
///
/// Every backend reports a missing record as `Ok(None)` from [`get`], however
/// the underlying service signals it. Any other failure is returned as an
/// error and never swallowed.
///
/// [`get`]: SceneStore::get
#[async_trait]
pub trait SceneStore: Send + Sync {
    /// Returns the name of the backend, for logs.
    fn backend_name(&self) -> &'static str;

    /// Fetches the record for a room.
    async fn get(&self, room: &RoomId) -> StoreResult<Option<StoredScene>>;

    /// Creates the record for a room that has none yet.
    async fn create(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()>;

    /// Replaces the record of a room.
    async fn update(&self, room: &RoomId, scene: &StoredScene) -> StoreResult<()>;
}
