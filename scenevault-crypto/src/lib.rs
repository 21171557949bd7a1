//! Encryption layer for SceneVault.
//!
//! Scenes are encrypted client-side before they reach any store, so a store
//! only ever sees a nonce, a ciphertext and the public scene version.
//!
//! - [`RoomKey`]: imported from the room secret shared between participants
//! - [`encrypt`] / [`decrypt`]: ChaCha20-Poly1305 over raw bytes
//! - [`encrypt_scene`] / [`decrypt_scene`]: the same over serialized scenes

mod cipher;
mod error;
mod key;
mod scene;

pub use cipher::{decrypt, encrypt, EncryptedData, NONCE_SIZE, TAG_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use key::{
    derive_key, generate_room_key, generate_room_secret, KdfParams, RoomKey, Salt, KEY_SIZE,
    ROOM_SECRET_SALT, SALT_SIZE,
};
pub use scene::{decrypt_scene, encrypt_scene};
