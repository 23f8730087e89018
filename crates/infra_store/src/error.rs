//! Storage error types
//!
//! File operations keep the path they failed on so log lines and error
//! chains point at the offending data file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur while reading or writing the claim file
#[derive(Debug, Error)]
pub enum StoreError {
    /// A filesystem operation failed
    #[error("Failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data file exists but does not hold a JSON array of claims
    #[error("Claim file {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory claim list could not be encoded
    #[error("Failed to serialize claims: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| StoreError::Io { action, path, source }
    }
}

impl From<StoreError> for PortError {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::Corrupt { source, .. } => PortError::corrupt(message, source),
            StoreError::Io { source, .. } => PortError::storage_with_source(message, source),
            StoreError::Serialize(source) => PortError::storage_with_source(message, source),
        }
    }
}
