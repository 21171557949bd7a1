//! Scene synchronization for SceneVault.
//!
//! Persists the scene of a collaboration room to a remote [`SceneStore`],
//! encrypted under the room key, with last-writer-wins versioning.
//!
//! # Components
//!
//! - **Session**: room id, room key and connection id of a live session
//! - **Version cache**: last version known to be stored, per session
//! - **Coordinator**: `is_saved`, `save` and `load`
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use scenevault_crypto::generate_room_key;
//! use scenevault_store::MemorySceneStore;
//! use scenevault_sync::{CollabSession, SceneSync};
//! use scenevault_types::{RoomId, Scene, SceneElement, SessionId};
//!
//! # let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! # rt.block_on(async {
//! let sync = SceneSync::new(Arc::new(MemorySceneStore::new()));
//! let room = RoomId::new("abc").unwrap();
//! let key = generate_room_key();
//! let session = CollabSession::new(room.clone(), key.clone(), SessionId::new());
//!
//! let scene = Scene::from_elements(vec![SceneElement::new("r1", "rectangle")]);
//! assert!(sync.save(&session, &scene).await.unwrap());
//! assert_eq!(sync.load(&room, &key, None).await.unwrap(), Some(scene));
//! # });
//! ```
//!
//! [`SceneStore`]: scenevault_store::SceneStore

mod cache;
mod coordinator;
mod error;
mod session;

pub use cache::VersionCache;
pub use coordinator::SceneSync;
pub use error::{SyncError, SyncResult};
pub use session::{ActiveSession, CollabSession};
