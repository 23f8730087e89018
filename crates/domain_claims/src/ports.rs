//! Claims Domain Ports
//!
//! The `ClaimStore` trait is everything the claim endpoints need from
//! storage: read the whole list, and append one claim. Adapters:
//!
//! - **File adapter**: a JSON array on local disk (`infra_store::FileClaimStore`)
//! - **In-memory adapter**: for tests ([`crate::adapters::InMemoryClaimStore`])
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use domain_claims::{ClaimStore, InMemoryClaimStore};
//!
//! let store: Arc<dyn ClaimStore> = Arc::new(InMemoryClaimStore::new());
//! store.append_claim(claim).await?;
//! let all = store.list_claims().await?;
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError};

use crate::claim::Claim;

/// Storage port for duty drawback claims
///
/// Implementations keep claims in insertion order and must make
/// `append_claim` atomic with respect to other appends: two concurrent
/// appends both end up in the list.
#[async_trait]
pub trait ClaimStore: DomainPort {
    /// Returns every stored claim in insertion order
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError>;

    /// Appends a claim to the end of the list
    async fn append_claim(&self, claim: Claim) -> Result<(), PortError>;
}
