//! Core type definitions for SceneVault.
//!
//! This crate defines the types shared by every other crate:
//! - Room and session identifiers
//! - The scene model and its version number
//! - Element restoration for scenes read back from storage
//!
//! Element geometry and rendering concerns belong to the application, not here.

mod ids;
mod restore;
mod scene;

pub use ids::{RoomId, SessionId, MAX_ROOM_ID_LEN};
pub use restore::{restore_elements, DefaultRestorer, ElementRestorer};
pub use scene::{Scene, SceneElement};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid room id: {0}")]
    InvalidRoomId(String),
}
