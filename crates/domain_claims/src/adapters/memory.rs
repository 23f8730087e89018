use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;

use core_kernel::{DomainPort, PortError};

use crate::claim::Claim;
use crate::ports::ClaimStore;

/// In-memory claim store for tests and local runs without a data file.
pub struct InMemoryClaimStore {
    claims: Mutex<Vec<Claim>>,
}

impl InMemoryClaimStore {
    pub fn new() -> Self {
        Self {
            claims: Mutex::new(Vec::new()),
        }
    }

    /// Creates a store pre-populated with `claims`
    pub fn with_claims(claims: Vec<Claim>) -> Self {
        Self {
            claims: Mutex::new(claims),
        }
    }
}

impl Default for InMemoryClaimStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainPort for InMemoryClaimStore {}

#[async_trait]
impl ClaimStore for InMemoryClaimStore {
    async fn list_claims(&self) -> Result<Vec<Claim>, PortError> {
        let claims = self
            .claims
            .lock()
            .map_err(|_| PortError::internal("claim store mutex poisoned"))?;
        Ok(claims.clone())
    }

    async fn append_claim(&self, claim: Claim) -> Result<(), PortError> {
        let mut claims = self
            .claims
            .lock()
            .map_err(|_| PortError::internal("claim store mutex poisoned"))?;
        debug!(claim_id = claim.claim_id, "Appending claim in memory");
        claims.push(claim);
        Ok(())
    }
}
