//! Test Data Builders
//!
//! Builder for claims with sensible defaults, so tests only spell out the
//! fields they care about.

use chrono::NaiveDate;
use domain_claims::Claim;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Builder for constructing test claims
pub struct ClaimBuilder {
    claim_id: i64,
    importer_name: String,
    hts_code: String,
    import_date: NaiveDate,
    import_quantity: i64,
    duties_paid: Decimal,
    drawback_claimed: Decimal,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            claim_id: 1,
            importer_name: "Test Importer Inc".to_string(),
            hts_code: "8471.30.01.00".to_string(),
            import_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            import_quantity: 100,
            duties_paid: dec!(1000.00),
            drawback_claimed: dec!(990.00),
        }
    }

    pub fn with_claim_id(mut self, claim_id: i64) -> Self {
        self.claim_id = claim_id;
        self
    }

    pub fn with_importer_name(mut self, name: impl Into<String>) -> Self {
        self.importer_name = name.into();
        self
    }

    pub fn with_hts_code(mut self, code: impl Into<String>) -> Self {
        self.hts_code = code.into();
        self
    }

    pub fn with_import_date(mut self, date: NaiveDate) -> Self {
        self.import_date = date;
        self
    }

    pub fn with_import_quantity(mut self, quantity: i64) -> Self {
        self.import_quantity = quantity;
        self
    }

    pub fn build(self) -> Claim {
        Claim::new(
            self.claim_id,
            self.importer_name,
            self.hts_code,
            self.import_date,
            self.import_quantity,
            self.duties_paid,
            self.drawback_claimed,
        )
    }
}
