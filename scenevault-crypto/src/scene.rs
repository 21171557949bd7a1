//! Scene-level encryption.

use crate::cipher::{self, EncryptedData};
use crate::error::{CryptoError, CryptoResult};
use crate::key::RoomKey;
use scenevault_types::Scene;

/// Serializes a scene to JSON and encrypts it under the room key.
pub fn encrypt_scene(key: &RoomKey, scene: &Scene) -> CryptoResult<EncryptedData> {
    let plaintext = scene.to_json_bytes()?;
    cipher::encrypt(key, &plaintext)
}

/// Decrypts a scene previously produced by [`encrypt_scene`].
///
/// Authentication failures and plaintext that is not a serialized scene are
/// both reported as [`CryptoError::Decryption`].
pub fn decrypt_scene(key: &RoomKey, encrypted: &EncryptedData) -> CryptoResult<Scene> {
    let plaintext = cipher::decrypt(key, encrypted)?;
    Scene::from_json_bytes(&plaintext)
        .map_err(|e| CryptoError::Decryption(format!("invalid scene payload: {e}")))
}
