//! Pre-built Test Fixtures
//!
//! Ready-to-use claims and raw JSON payloads. Values are fixed so assertions
//! can compare field for field.

use chrono::NaiveDate;
use domain_claims::Claim;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A computer hardware import (HTS chapter 84)
    pub fn laptops() -> Claim {
        Claim::new(
            1001,
            "Acme Imports LLC",
            "8471.30.01.00",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            500,
            dec!(1250.75),
            dec!(1100.50),
        )
    }

    /// A furniture import (HTS chapter 94) from a different importer
    pub fn furniture() -> Claim {
        Claim::new(
            1002,
            "Globex Corp",
            "9403.20.00.80",
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            120,
            dec!(840.00),
            dec!(756.00),
        )
    }

    /// A steel import claiming more than the duties paid
    pub fn over_claimed_steel() -> Claim {
        Claim::new(
            1003,
            "Initech Metals",
            "7208.51.00.30",
            NaiveDate::from_ymd_opt(2023, 11, 30).unwrap(),
            20,
            dec!(100.00),
            dec!(250.00),
        )
    }

    pub fn all() -> Vec<Claim> {
        vec![Self::laptops(), Self::furniture(), Self::over_claimed_steel()]
    }
}

/// Fixture for raw request payloads
pub struct PayloadFixtures;

impl PayloadFixtures {
    /// The wire form of [`ClaimFixtures::laptops`]
    pub fn laptops() -> Value {
        json!({
            "claimID": 1001,
            "importerName": "Acme Imports LLC",
            "HTSCode": "8471.30.01.00",
            "importDate": "2024-03-15",
            "importQuantity": 500,
            "dutiesPaid": 1250.75,
            "drawbackClaimed": 1100.50
        })
    }

    /// The laptops payload with one field removed
    pub fn laptops_without(field: &str) -> Value {
        let mut payload = Self::laptops();
        if let Some(object) = payload.as_object_mut() {
            object.remove(field);
        }
        payload
    }

    /// Every field name of the claim schema
    pub fn field_names() -> [&'static str; 7] {
        [
            "claimID",
            "importerName",
            "HTSCode",
            "importDate",
            "importQuantity",
            "dutiesPaid",
            "drawbackClaimed",
        ]
    }
}
