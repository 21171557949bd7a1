//! Remote scene stores for SceneVault.
//!
//! A scene store keeps at most one encrypted [`StoredScene`] per room and
//! exposes get/create/update by room id through the [`SceneStore`] trait.
//!
//! Backends:
//! - [`HttpSceneStore`]: generic HTTP document endpoint
//! - [`CollectionSceneStore`]: bucket/collection scoped record service
//! - [`MemorySceneStore`]: in-process, for development and tests
//!
//! The backend is picked at startup from a [`StoreConfig`] via [`connect`].

mod collection;
mod config;
mod error;
mod http;
mod memory;
mod record;
mod store;

pub use collection::{CollectionSceneStore, CollectionStoreConfig};
pub use config::{
    connect, StoreConfig, ENV_BACKEND, ENV_BUCKET, ENV_COLLECTION, ENV_TIMEOUT_SECS, ENV_TOKEN,
    ENV_URL,
};
pub use error::{StoreError, StoreResult};
pub use http::{HttpSceneStore, HttpStoreConfig};
pub use memory::MemorySceneStore;
pub use record::{SceneDocument, StoredScene};
pub use store::SceneStore;
