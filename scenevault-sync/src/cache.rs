//! Saved-version cache.
//!
//! Remembers, per live session, the last scene version known to be durably
//! stored. Entries live until the owning session ends and removes them.

use scenevault_types::SessionId;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Map from session to last known stored scene version. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct VersionCache {
    versions: Arc<RwLock<HashMap<SessionId, u64>>>,
}

impl VersionCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last known stored version for a session.
    pub async fn get(&self, session: SessionId) -> Option<u64> {
        self.versions.read().await.get(&session).copied()
    }

    /// Records the stored version for a session, overwriting any previous value.
    pub async fn set(&self, session: SessionId, version: u64) {
        self.versions.write().await.insert(session, version);
    }

    /// Forgets a session. Returns the version it had, if any.
    pub async fn remove(&self, session: SessionId) -> Option<u64> {
        self.versions.write().await.remove(&session)
    }

    /// Forgets every session.
    pub async fn clear(&self) {
        self.versions.write().await.clear();
    }

    /// Returns the number of tracked sessions.
    pub async fn len(&self) -> usize {
        self.versions.read().await.len()
    }

    /// Returns true if no session is tracked.
    pub async fn is_empty(&self) -> bool {
        self.versions.read().await.is_empty()
    }
}
