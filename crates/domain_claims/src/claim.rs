//! Claim record

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A duty drawback claim
///
/// The serialized field names match the wire format and the stored JSON
/// exactly (`claimID`, `HTSCode`, ...). Deserialization is the schema check:
/// every field is required and must have the stated type. Amounts travel as
/// JSON numbers and are held as [`Decimal`] in memory.
///
/// No business rules are applied. `claim_id` is not required to be unique and
/// `drawback_claimed` may exceed `duties_paid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Caller-supplied claim identifier
    #[serde(rename = "claimID")]
    pub claim_id: i64,
    /// Name of the importer of record
    #[serde(rename = "importerName")]
    pub importer_name: String,
    /// Harmonized Tariff Schedule code of the imported goods
    #[serde(rename = "HTSCode")]
    pub hts_code: String,
    /// Calendar date of import
    #[serde(rename = "importDate")]
    pub import_date: NaiveDate,
    /// Quantity imported
    #[serde(rename = "importQuantity")]
    pub import_quantity: i64,
    /// Duties paid at import
    #[serde(rename = "dutiesPaid", with = "amount")]
    pub duties_paid: Decimal,
    /// Refund requested
    #[serde(rename = "drawbackClaimed", with = "amount")]
    pub drawback_claimed: Decimal,
}

impl Claim {
    pub fn new(
        claim_id: i64,
        importer_name: impl Into<String>,
        hts_code: impl Into<String>,
        import_date: NaiveDate,
        import_quantity: i64,
        duties_paid: Decimal,
        drawback_claimed: Decimal,
    ) -> Self {
        Self {
            claim_id,
            importer_name: importer_name.into(),
            hts_code: hts_code.into(),
            import_date,
            import_quantity,
            duties_paid,
            drawback_claimed,
        }
    }
}

/// Amounts are JSON numbers on the wire. Serializing through the decimal text
/// picks the nearest `f64`, so values with up to 15 significant digits read
/// back unchanged.
mod amount {
    use rust_decimal::Decimal;
    use serde::{ser, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
        let number: f64 = value.to_string().parse().map_err(ser::Error::custom)?;
        serializer.serialize_f64(number)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer)
    }
}
