//! Error types for the encryption layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key import or derivation failed.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// Encryption failed.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// Decryption failed (wrong key, tampered data or malformed payload).
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// Invalid nonce length.
    #[error("invalid nonce length: expected {expected}, got {actual}")]
    InvalidNonceLength { expected: usize, actual: usize },

    /// The scene could not be serialized before encryption.
    #[error("scene serialization failed: {0}")]
    Serialization(#[from] scenevault_types::Error),
}

impl CryptoError {
    /// Returns true if the error means stored data could not be turned back
    /// into a scene, as opposed to a failure while producing ciphertext.
    pub fn is_decryption_failure(&self) -> bool {
        matches!(
            self,
            CryptoError::Decryption(_) | CryptoError::InvalidNonceLength { .. }
        )
    }
}
