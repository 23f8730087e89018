//! Claims domain errors

use thiserror::Error;

use core_kernel::TemporalError;

/// Errors raised while building claim searches
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Invalid HTS pattern \"{pattern}\": {reason}")]
    InvalidHtsPattern { pattern: String, reason: String },

    #[error(transparent)]
    InvalidDateRange(#[from] TemporalError),
}

impl ClaimError {
    pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        ClaimError::InvalidHtsPattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}
