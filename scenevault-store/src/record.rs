//! Persisted record shapes.
//!
//! Field names are part of the wire format and shared with non-Rust clients.

use scenevault_crypto::{CryptoResult, EncryptedData};
use serde::{Deserialize, Serialize};

/// One encrypted scene as stored for a room.
///
/// `iv` and `ciphertext` always come from the same encryption call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredScene {
    /// Version of the scene that was encrypted.
    pub scene_version: u64,
    /// Base64 nonce.
    pub iv: String,
    /// Base64 ciphertext including the auth tag.
    pub ciphertext: String,
}

impl StoredScene {
    /// Builds a record from the output of one encryption call.
    pub fn new(scene_version: u64, encrypted: &EncryptedData) -> Self {
        Self {
            scene_version,
            iv: encrypted.iv_base64(),
            ciphertext: encrypted.ciphertext_base64(),
        }
    }

    /// Decodes the transport encoding back into encrypted data.
    pub fn encrypted_data(&self) -> CryptoResult<EncryptedData> {
        EncryptedData::from_base64_parts(&self.iv, &self.ciphertext)
    }
}

/// Body exchanged with the HTTP document endpoint: `{ "id", "data" }`.
///
/// `data` is optional on reads; a `null` payload means the room is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Room id.
    pub id: String,
    /// The stored scene, if any.
    pub data: Option<StoredScene>,
}

impl SceneDocument {
    /// Wraps a record for the given room.
    pub fn new(id: impl Into<String>, data: StoredScene) -> Self {
        Self {
            id: id.into(),
            data: Some(data),
        }
    }
}
