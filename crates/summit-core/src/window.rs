//! Detect two-consecutive-day windows in a single partner's availability.
//!
//! A partner votes for start date `d` when they are available on `d` and on
//! `d + 1 day`. Which pairs of dates get compared is controlled by
//! [`AdjacencyPolicy`].

use chrono::NaiveDate;

use crate::error::{DateFormatError, PlannerError, Result};
use crate::model::Partner;

/// Format accepted for `availableDates` entries.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// How a partner's date list is scanned for consecutive days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjacencyPolicy {
    /// Compare only entries that are neighbours in the list as supplied.
    /// Assumes the list is sorted ascending; a consecutive pair that is not
    /// list-adjacent is not detected.
    #[default]
    ListOrder,
    /// Sort and de-duplicate the dates first, then compare neighbours.
    Sorted,
}

/// One partner's vote for a window starting on `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vote<'a> {
    pub start: NaiveDate,
    pub email: &'a str,
}

/// Parse every `availableDates` entry of `partner`, preserving list order.
///
/// # Errors
/// Returns `PlannerError::MalformedDate` naming the first entry that is not a
/// `YYYY-MM-DD` calendar date.
pub fn parse_available_dates(partner: &Partner) -> Result<Vec<NaiveDate>> {
    partner
        .available_dates
        .iter()
        .map(|raw| {
            parse_iso_date(raw).map_err(|source| PlannerError::MalformedDate {
                email: partner.email.clone(),
                value: raw.clone(),
                source,
            })
        })
        .collect()
}

/// Parse a strict `YYYY-MM-DD` date.
///
/// chrono's `%Y-%m-%d` also takes unpadded fields, a leading sign and leading
/// whitespace, so the shape is checked before handing off to chrono.
fn parse_iso_date(raw: &str) -> std::result::Result<NaiveDate, DateFormatError> {
    if !has_iso_shape(raw) {
        return Err(DateFormatError::Shape);
    }
    Ok(NaiveDate::parse_from_str(raw, DATE_FORMAT)?)
}

/// Exactly ten ASCII bytes: digits everywhere except `-` at indexes 4 and 7.
fn has_iso_shape(raw: &str) -> bool {
    raw.len() == 10
        && raw.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Emit a vote for every consecutive-day pair in `partner`'s availability.
///
/// Votes come out in scan order. The same start date can appear more than once
/// when the list repeats a date; callers collapse those with set semantics.
///
/// # Errors
/// Propagates `PlannerError::MalformedDate` from [`parse_available_dates`].
pub fn detect_windows(partner: &Partner, policy: AdjacencyPolicy) -> Result<Vec<Vote<'_>>> {
    let mut dates = parse_available_dates(partner)?;

    if policy == AdjacencyPolicy::Sorted {
        dates.sort_unstable();
        dates.dedup();
    }

    let votes = dates
        .windows(2)
        .filter(|pair| is_next_day(pair[0], pair[1]))
        .map(|pair| Vote {
            start: pair[0],
            email: partner.email.as_str(),
        })
        .collect();

    Ok(votes)
}

/// True when `next` is exactly one calendar day after `day`.
fn is_next_day(day: NaiveDate, next: NaiveDate) -> bool {
    day.succ_opt() == Some(next)
}
