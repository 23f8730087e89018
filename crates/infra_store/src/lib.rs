//! Storage Infrastructure Layer
//!
//! This crate provides the file-backed implementation of the
//! [`domain_claims::ClaimStore`] port. All claims live in a single JSON array
//! on local disk, rewritten in full on every append.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::FileClaimStore;
//!
//! let store = FileClaimStore::new("data/dutydrawback_claims.json");
//! let claims = store.read_data().await?;
//! ```

pub mod error;
pub mod file_store;

pub use error::StoreError;
pub use file_store::FileClaimStore;
