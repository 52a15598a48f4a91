//! Decode partner records from JSON.
//!
//! Accepts the wrapped document `{"partners": [...]}` or a bare array of
//! partner objects. Required fields are checked record by record so the error
//! can point at the offending entry.

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{PlannerError, Result};
use crate::model::Partner;

/// A partner record before required-field checks.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPartner {
    first_name: Option<String>,
    last_name: Option<String>,
    email: Option<String>,
    country: Option<String>,
    available_dates: Option<Vec<String>>,
}

impl RawPartner {
    fn into_partner(self, index: usize) -> Result<Partner> {
        let missing = |field| PlannerError::MissingField { index, field };
        Ok(Partner {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            email: self.email.ok_or_else(|| missing("email"))?,
            country: self.country.ok_or_else(|| missing("country"))?,
            available_dates: self
                .available_dates
                .ok_or_else(|| missing("availableDates"))?,
        })
    }
}

/// Parse a JSON document into partner records.
///
/// `firstName` and `lastName` default to empty strings. Date strings are not
/// validated here; that happens during planning.
///
/// # Errors
/// - `PlannerError::Json` for invalid JSON or a document that is neither an
///   array nor an object with a `partners` array.
/// - `PlannerError::MissingField` when `email`, `country` or `availableDates`
///   is absent or null.
pub fn parse_partners(json: &str) -> Result<Vec<Partner>> {
    let document: Value = serde_json::from_str(json)?;

    let records = match document {
        Value::Array(records) => records,
        Value::Object(mut map) => match map.remove("partners") {
            Some(Value::Array(records)) => records,
            Some(_) => {
                return Err(serde_json::Error::custom("`partners` must be an array").into())
            }
            None => {
                return Err(serde_json::Error::custom("missing top-level `partners` key").into())
            }
        },
        _ => {
            return Err(serde_json::Error::custom(
                "expected an array of partners or an object with a `partners` key",
            )
            .into())
        }
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            let raw: RawPartner = serde_json::from_value(record)?;
            raw.into_partner(index)
        })
        .collect()
}
