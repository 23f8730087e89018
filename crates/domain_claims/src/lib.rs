//! Duty Drawback Claims Domain
//!
//! This crate defines the duty drawback claim record and everything the API
//! layer needs to work with a collection of claims:
//!
//! - [`Claim`]: the seven-field claim schema, validated by typed deserialization
//! - [`HtsPattern`]: Harmonized Tariff Schedule code patterns used by search
//! - [`ClaimQuery`]: combined HTS / import date / importer filters
//! - [`ClaimStore`]: the storage port, with an in-memory adapter for tests
//!
//! # Claim Lifecycle
//!
//! ```text
//! POST /api/claims -> ClaimStore::append_claim -> (never updated or deleted)
//! ```

pub mod claim;
pub mod hts;
pub mod query;
pub mod ports;
pub mod adapters;
pub mod error;

pub use claim::Claim;
pub use hts::HtsPattern;
pub use query::ClaimQuery;
pub use ports::ClaimStore;
pub use adapters::InMemoryClaimStore;
pub use error::ClaimError;
