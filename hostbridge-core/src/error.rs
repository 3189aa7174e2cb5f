//! Error taxonomy shared by every bridge crate.
//!
//! Host-boundary faults are recovered at the call into the backend and mapped
//! onto these variants; nothing crosses the store's public surface except a
//! typed [`BridgeError`].

use thiserror::Error;

/// Errors surfaced by bridge operations.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Requested key or index does not exist in the backend.
    #[error("key or index not found in backend")]
    NotFound,

    /// Backend refused a write because its storage quota is exhausted.
    #[error("backend storage quota exceeded")]
    QuotaExceeded,

    /// Stored value is not valid base64 (data corruption or a value written
    /// outside the store's contract).
    #[error("stored value is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Any other host-boundary failure, recovered and stringified.
    #[error("host backend failure: {0}")]
    Host(String),
}

impl BridgeError {
    /// True for the one outcome callers are expected to treat as routine
    /// ("key never set") rather than exceptional.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BridgeError::NotFound)
    }
}

/// Result alias used across the bridge crates.
pub type Result<T> = std::result::Result<T, BridgeError>;
