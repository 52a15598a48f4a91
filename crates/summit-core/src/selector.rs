//! Aggregate votes per country and pick the winning start date.

use tracing::debug;

use crate::error::Result;
use crate::model::{CandidateWindows, CountryResult, Partner};
use crate::window::{self, AdjacencyPolicy};

/// Run the window detector for every partner and collect voters per start date.
///
/// A start date is added on its first vote. Each entry is a set, so a partner
/// who votes for the same start date twice is counted once.
///
/// # Errors
/// Fails on the first partner with a malformed date.
pub fn collect_candidates<'a, I>(partners: I, policy: AdjacencyPolicy) -> Result<CandidateWindows>
where
    I: IntoIterator<Item = &'a Partner>,
{
    let mut candidates = CandidateWindows::new();
    for partner in partners {
        for vote in window::detect_windows(partner, policy)? {
            candidates
                .entry(vote.start)
                .or_default()
                .insert(vote.email.to_string());
        }
    }
    Ok(candidates)
}

/// Pick the start date with the most attendees, earliest date on ties.
///
/// Candidates are scanned in ascending date order and the running best is only
/// replaced by a strictly larger set, so the first date to reach the maximum
/// wins. With no candidates the result has zero attendees and no start date.
pub fn select_best(country: &str, candidates: CandidateWindows) -> CountryResult {
    let mut best = None;
    let mut best_count = 0;

    for (start, emails) in candidates {
        if emails.len() > best_count {
            best_count = emails.len();
            best = Some((start, emails));
        }
    }

    match best {
        Some((start, emails)) => {
            debug!(country, %start, attendees = best_count, "selected window");
            CountryResult {
                attendee_count: emails.len(),
                attendees: emails.into_iter().collect(),
                name: country.to_string(),
                start_date: Some(start),
            }
        }
        None => {
            debug!(country, "no consecutive-day availability");
            CountryResult::empty(country)
        }
    }
}
