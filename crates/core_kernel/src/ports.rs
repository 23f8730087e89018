//! Ports and Adapters Infrastructure
//!
//! The claim endpoints never touch the filesystem directly. They talk to a
//! port trait defined in the domain crate, and adapters provide the storage:
//!
//! ```text
//!            interface_api handlers
//!                     │
//!                     ▼
//!     domain_claims::ClaimStore (port trait)
//!           ▲                       ▲
//!           │                       │
//!  ┌────────┴─────────┐   ┌─────────┴──────────┐
//!  │ FileClaimStore   │   │ InMemoryClaimStore │
//!  │ (infra_store)    │   │ (tests)            │
//!  └──────────────────┘   └────────────────────┘
//! ```
//!
//! All adapters report failures through [`PortError`] so the API layer can map
//! them to responses without knowing which adapter is in use.

use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The backing store could not be read or written
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backing store holds data that cannot be decoded
    #[error("Corrupt data: {message}")]
    Corrupt {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl PortError {
    /// Creates a Storage error wrapping its cause
    pub fn storage_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PortError::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a Corrupt error wrapping its cause
    pub fn corrupt(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        PortError::Corrupt {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the stored data itself is unreadable
    pub fn is_corrupt(&self) -> bool {
        matches!(self, PortError::Corrupt { .. })
    }
}

/// Marker trait for all domain ports
///
/// Port traits extend this so adapters can be shared as `Arc<dyn Port>`
/// across request handlers.
pub trait DomainPort: Send + Sync + 'static {}
