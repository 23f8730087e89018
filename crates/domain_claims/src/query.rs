//! Claim search

use chrono::NaiveDate;

use core_kernel::{DateRange, RelativeRange};

use crate::claim::Claim;
use crate::error::ClaimError;
use crate::hts::HtsPattern;

/// Filter over stored claims
///
/// Criteria are combined with AND. Within a criterion the alternatives are
/// combined with OR: a claim passes the HTS criterion when any pattern
/// matches, and the date criterion when its import date lies in any window.
/// An empty criterion places no restriction.
#[derive(Debug, Clone, Default)]
pub struct ClaimQuery {
    pub hts_patterns: Vec<HtsPattern>,
    pub date_ranges: Vec<DateRange>,
    pub importer_name: Option<String>,
}

impl ClaimQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds comma-separated HTS patterns
    pub fn with_hts_patterns(mut self, patterns: &str) -> Result<Self, ClaimError> {
        self.hts_patterns.extend(HtsPattern::parse_list(patterns)?);
        Ok(self)
    }

    /// Adds a window relative to `today`
    pub fn with_relative_range(mut self, range: RelativeRange, today: NaiveDate) -> Self {
        self.date_ranges.push(range.resolve(today));
        self
    }

    /// Adds an absolute window; a missing bound leaves that side open
    pub fn with_bounds(
        mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Self, ClaimError> {
        if let Some(range) = DateRange::from_bounds(from, to)? {
            self.date_ranges.push(range);
        }
        Ok(self)
    }

    pub fn with_importer_name(mut self, name: impl Into<String>) -> Self {
        self.importer_name = Some(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.hts_patterns.is_empty() && self.date_ranges.is_empty() && self.importer_name.is_none()
    }

    pub fn matches(&self, claim: &Claim) -> bool {
        let hts_ok = self.hts_patterns.is_empty()
            || self.hts_patterns.iter().any(|p| p.matches(&claim.hts_code));
        let date_ok = self.date_ranges.is_empty()
            || self.date_ranges.iter().any(|r| r.contains(claim.import_date));
        let importer_ok = self
            .importer_name
            .as_deref()
            .map_or(true, |name| claim.importer_name == name);

        hts_ok && date_ok && importer_ok
    }

    /// Keeps the matching claims, preserving their order
    pub fn apply(&self, claims: Vec<Claim>) -> Vec<Claim> {
        if self.is_empty() {
            return claims;
        }
        claims.into_iter().filter(|c| self.matches(c)).collect()
    }
}
