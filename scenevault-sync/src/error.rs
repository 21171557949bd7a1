//! Error types for the sync layer.

use scenevault_crypto::CryptoError;
use scenevault_store::StoreError;
use thiserror::Error;

/// Result type for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Errors that can occur while saving or loading a scene.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The store failed for a reason other than a missing record.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Encryption or decryption failed.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),
}

impl SyncError {
    /// Returns true if stored data could not be decrypted into a scene
    /// (wrong room key, tampered or corrupt record).
    pub fn is_decryption(&self) -> bool {
        matches!(self, SyncError::Crypto(e) if e.is_decryption_failure())
    }

    /// Returns true if the store itself failed; retrying later may succeed.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, SyncError::Store(_))
    }
}
