//! Room key import and generation.
//!
//! Every participant of a room holds the same shared secret (it travels in
//! the room link, never to the store). Importing that secret must give every
//! client the same key, so nothing random goes into the import.

use crate::error::{CryptoError, CryptoResult};
use argon2::{Argon2, Params, Version};
use base64::{
    engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD},
    Engine,
};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of encryption keys in bytes (256 bits for ChaCha20).
pub const KEY_SIZE: usize = 32;

/// Size of salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Fixed salt for stretching human-chosen room secrets.
///
/// It has to be constant: two clients importing the same secret must agree
/// on the key without exchanging anything else.
pub const ROOM_SECRET_SALT: [u8; SALT_SIZE] = *b"scenevault-room1";

/// Symmetric key protecting one room, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoomKey {
    bytes: [u8; KEY_SIZE],
}

impl RoomKey {
    /// Creates a key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }

    /// Imports a room secret with the default stretching parameters.
    ///
    /// A secret that is the URL-safe base64 encoding of exactly [`KEY_SIZE`]
    /// bytes (what [`generate_room_secret`] produces) is used as the raw key.
    /// Anything else is treated as a passphrase and stretched with Argon2id
    /// over [`ROOM_SECRET_SALT`].
    pub fn import(secret: &str) -> CryptoResult<Self> {
        Self::import_with_params(secret, &KdfParams::default())
    }

    /// Imports a room secret, stretching passphrases with `params`.
    pub fn import_with_params(secret: &str, params: &KdfParams) -> CryptoResult<Self> {
        if secret.is_empty() {
            return Err(CryptoError::KeyDerivation("room secret is empty".to_string()));
        }
        if let Some(raw) = decode_raw_key(secret) {
            return Ok(Self::from_bytes(raw));
        }
        derive_key(secret, &Salt::from_bytes(ROOM_SECRET_SALT), params)
    }
}

impl std::fmt::Debug for RoomKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoomKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for RoomKey {
    fn eq(&self, other: &Self) -> bool {
        // Not constant-time; keys are only compared in tests and diagnostics.
        self.bytes == other.bytes
    }
}

impl Eq for RoomKey {}

fn decode_raw_key(secret: &str) -> Option<[u8; KEY_SIZE]> {
    let decoded = URL_SAFE_NO_PAD
        .decode(secret)
        .or_else(|_| URL_SAFE.decode(secret))
        .ok()?;
    decoded.try_into().ok()
}

/// Salt for key derivation.
#[derive(Clone, Debug)]
pub struct Salt {
    bytes: [u8; SALT_SIZE],
}

impl Salt {
    /// Creates a salt from raw bytes.
    pub fn from_bytes(bytes: [u8; SALT_SIZE]) -> Self {
        Self { bytes }
    }

    /// Returns the salt bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_SIZE] {
        &self.bytes
    }
}

/// Key derivation parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KdfParams {
    /// Memory cost in KiB.
    pub memory_cost: u32,
    /// Time cost (iterations).
    pub time_cost: u32,
    /// Parallelism factor.
    pub parallelism: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        // OWASP recommendations for Argon2id (2023)
        Self {
            memory_cost: 19 * 1024, // 19 MiB
            time_cost: 2,
            parallelism: 1,
        }
    }
}

/// Derives a key from a secret using Argon2id.
pub fn derive_key(secret: &str, salt: &Salt, params: &KdfParams) -> CryptoResult<RoomKey> {
    let argon2_params = Params::new(
        params.memory_cost,
        params.time_cost,
        params.parallelism,
        Some(KEY_SIZE),
    )
    .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, argon2_params);

    let mut key_bytes = [0u8; KEY_SIZE];
    argon2
        .hash_password_into(secret.as_bytes(), salt.as_bytes(), &mut key_bytes)
        .map_err(|e| CryptoError::KeyDerivation(e.to_string()))?;

    let key = RoomKey::from_bytes(key_bytes);
    key_bytes.zeroize();
    Ok(key)
}

/// Generates a fresh room secret: [`KEY_SIZE`] random bytes, URL-safe
/// base64 without padding, ready to be placed in a room link.
pub fn generate_room_secret() -> String {
    let mut bytes = [0u8; KEY_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    let secret = URL_SAFE_NO_PAD.encode(bytes);
    bytes.zeroize();
    secret
}

/// Generates a random room key.
pub fn generate_room_key() -> RoomKey {
    let mut bytes = [0u8; KEY_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    RoomKey::from_bytes(bytes)
}
