//! Save and load of encrypted scenes.
//!
//! A save is an optimistic compare-and-swap on a single record: fetch the
//! current record, and write only if the candidate's scene version is
//! strictly higher. There is no lock between the fetch and the write and no
//! retry; a losing writer gets `false` and tries again on its next save.

use crate::cache::VersionCache;
use crate::error::SyncResult;
use crate::session::CollabSession;
use scenevault_crypto::{decrypt_scene, encrypt_scene, RoomKey};
use scenevault_store::{SceneStore, StoreError, StoredScene};
use scenevault_types::{DefaultRestorer, ElementRestorer, RoomId, Scene, SessionId};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Coordinates saving and loading scenes for collaboration sessions.
pub struct SceneSync {
    store: Arc<dyn SceneStore>,
    cache: VersionCache,
    restorer: Arc<dyn ElementRestorer>,
}

impl SceneSync {
    /// Creates a coordinator using the default element restorer.
    pub fn new(store: Arc<dyn SceneStore>) -> Self {
        Self::with_restorer(store, Arc::new(DefaultRestorer))
    }

    /// Creates a coordinator with a custom element restorer.
    pub fn with_restorer(store: Arc<dyn SceneStore>, restorer: Arc<dyn ElementRestorer>) -> Self {
        Self {
            store,
            cache: VersionCache::new(),
            restorer,
        }
    }

    /// Returns the saved-version cache.
    pub fn cache(&self) -> &VersionCache {
        &self.cache
    }

    /// Returns the last version known to be stored for a session.
    pub async fn cached_version(&self, session: SessionId) -> Option<u64> {
        self.cache.get(session).await
    }

    /// Forgets a session. Call when its connection is torn down.
    pub async fn end_session(&self, session: SessionId) {
        if let Some(version) = self.cache.remove(session).await {
            debug!(session = %session, version, "dropped saved-version entry");
        }
    }

    /// Returns whether `scene` is known to be stored for this session.
    ///
    /// A session without a room, key or connection counts as saved: there is
    /// nothing to synchronize, and callers should not block on it.
    ///
    /// Only the cache is consulted. If the cache is stale (e.g. the store was
    /// written by another process) this can report `true` for a scene the
    /// store no longer holds.
    pub async fn is_saved(&self, session: &CollabSession, scene: &Scene) -> bool {
        let Some(active) = session.active() else {
            return true;
        };
        self.cache.get(active.session_id).await == Some(scene.version())
    }

    /// Saves a scene for the session's room.
    ///
    /// Returns `Ok(true)` when the scene was written or nothing needed to be
    /// written, and `Ok(false)` when the store already holds an equal or newer
    /// version or a concurrent writer got there between the fetch and the
    /// write. Nothing is cached in either `false` case. Store failures are
    /// returned as errors without any partial write.
    pub async fn save(&self, session: &CollabSession, scene: &Scene) -> SyncResult<bool> {
        let Some(active) = session.active() else {
            return Ok(true);
        };
        if self.is_saved(session, scene).await {
            return Ok(true);
        }

        let scene_version = scene.version();
        let encrypted = encrypt_scene(active.room_key, scene)?;
        let candidate = StoredScene::new(scene_version, &encrypted);
        let room = active.room_id;

        let current = match self.store.get(room).await {
            Ok(current) => current,
            Err(e) => {
                warn!(room = %room, backend = self.store.backend_name(), error = %e, "failed to fetch stored scene");
                return Err(e.into());
            }
        };

        let write = match current {
            None => self.store.create(room, &candidate).await,
            Some(stored) if stored.scene_version >= scene_version => {
                debug!(
                    room = %room,
                    stored = stored.scene_version,
                    candidate = scene_version,
                    "store holds an equal or newer scene, not saving"
                );
                return Ok(false);
            }
            Some(_) => self.store.update(room, &candidate).await,
        };
        match write {
            Ok(()) => {}
            Err(StoreError::Conflict(reason)) => {
                debug!(
                    room = %room,
                    candidate = scene_version,
                    reason = %reason,
                    "concurrent writer won, not saving"
                );
                return Ok(false);
            }
            Err(e) => {
                warn!(room = %room, backend = self.store.backend_name(), error = %e, "failed to write scene");
                return Err(e.into());
            }
        }

        self.cache.set(active.session_id, scene_version).await;
        info!(room = %room, version = scene_version, "scene saved");
        Ok(true)
    }

    /// Loads and decrypts the scene stored for a room.
    ///
    /// Returns `Ok(None)` if the room has never been saved. When `session` is
    /// given, its cache entry is set to the loaded version so an immediate
    /// save of the same content is skipped.
    pub async fn load(
        &self,
        room: &RoomId,
        room_key: &RoomKey,
        session: Option<SessionId>,
    ) -> SyncResult<Option<Scene>> {
        let stored = match self.store.get(room).await {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                debug!(room = %room, "no stored scene");
                return Ok(None);
            }
            Err(e) => {
                warn!(room = %room, backend = self.store.backend_name(), error = %e, "failed to fetch stored scene");
                return Err(e.into());
            }
        };

        let encrypted = stored.encrypted_data()?;
        let scene = decrypt_scene(room_key, &encrypted)?;
        let version = scene.version();

        if let Some(session) = session {
            self.cache.set(session, version).await;
        }

        debug!(room = %room, version, elements = scene.len(), "scene loaded");
        Ok(Some(self.restorer.restore_scene(scene)))
    }
}
