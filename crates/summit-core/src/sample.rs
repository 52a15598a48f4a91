//! Embedded ten-partner dataset covering three countries.
//!
//! Ireland has one partner with a single consecutive pair, the United States has
//! two partners with no consecutive days, and Spain has seven partners with a
//! tie between 2017-04-28 and 2017-04-29. The seventh Spain record is not a
//! typo: its only pair starts on 2017-04-30, which never reaches the maximum.

use crate::error::Result;
use crate::input::parse_partners;
use crate::model::Partner;

/// The sample dataset in its `{"partners": [...]}` document form.
pub const SAMPLE_JSON: &str = include_str!("sample.json");

/// Decode [`SAMPLE_JSON`].
pub fn sample_partners() -> Result<Vec<Partner>> {
    parse_partners(SAMPLE_JSON)
}
