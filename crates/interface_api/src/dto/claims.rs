//! Claims DTOs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use core_kernel::RelativeRange;
use domain_claims::{Claim, ClaimError, ClaimQuery};

pub const CLAIM_SAVED_MESSAGE: &str = "Claim saved successfully";

/// Response to a successful create
#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimSavedResponse {
    pub message: String,
    pub claim: Claim,
}

impl ClaimSavedResponse {
    pub fn saved(claim: Claim) -> Self {
        Self {
            message: CLAIM_SAVED_MESSAGE.to_string(),
            claim,
        }
    }
}

/// Query string of `GET /api/claims/search`
#[derive(Debug, Default, Deserialize)]
pub struct SearchClaimsParams {
    /// Comma-separated HTS patterns
    pub hts: Option<String>,
    pub range: Option<RelativeRange>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    #[serde(rename = "importerName")]
    pub importer_name: Option<String>,
}

impl SearchClaimsParams {
    /// Builds the domain query, resolving relative windows against `today`
    pub fn into_query(self, today: NaiveDate) -> Result<ClaimQuery, ClaimError> {
        let mut query = ClaimQuery::new();
        if let Some(patterns) = self.hts.as_deref() {
            query = query.with_hts_patterns(patterns)?;
        }
        if let Some(range) = self.range {
            query = query.with_relative_range(range, today);
        }
        query = query.with_bounds(self.from, self.to)?;
        if let Some(name) = self.importer_name {
            query = query.with_importer_name(name);
        }
        Ok(query)
    }
}
