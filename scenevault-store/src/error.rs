//! Error types for the store layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur while talking to a scene store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure (connection refused, timeout, interrupted body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with an unexpected status.
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The record does not exist. Backends turn this into an absent result
    /// on reads; it only escapes from writes and raw record fetches.
    #[error("record not found (status {status})")]
    NotFound { status: u16 },

    /// The write collided with the current state of the record.
    #[error("record conflict: {0}")]
    Conflict(String),

    /// The backend answered with a body that is not a valid record.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid backend configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl StoreError {
    /// Returns true if this error signals an absent record.
    pub fn is_not_found(&self) -> bool {
        match self {
            StoreError::NotFound { .. } => true,
            StoreError::Status { status, .. } => *status == 404,
            _ => false,
        }
    }
}
