//! Partner and result records.
//!
//! Field names serialize in camelCase so the JSON documents read and written by
//! the planner keep the `firstName` / `availableDates` / `attendeeCount` shape.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;

/// A person who may attend their country's event.
///
/// `email` is the identity used for attendance. `available_dates` is kept exactly
/// as supplied (string form, list order preserved); parsing happens in
/// [`crate::window`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub available_dates: Vec<String>,
}

/// Input document form: `{"partners": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct PartnerList {
    pub partners: Vec<Partner>,
}

/// Start date → emails of partners available on that date and the next.
pub type CandidateWindows = BTreeMap<NaiveDate, BTreeSet<String>>;

/// The chosen event window for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryResult {
    pub attendee_count: usize,
    /// Attendee emails in ascending order.
    pub attendees: Vec<String>,
    pub name: String,
    /// `None` when no partner in the country has two consecutive days.
    pub start_date: Option<NaiveDate>,
}

impl CountryResult {
    /// The result for a country where nobody can attend a two-day window.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            attendee_count: 0,
            attendees: Vec::new(),
            name: name.into(),
            start_date: None,
        }
    }
}

/// Output document form: `{"countries": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryReport {
    pub countries: Vec<CountryResult>,
}

impl CountryReport {
    /// Serialize to a single-line JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
