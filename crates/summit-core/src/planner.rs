//! End-to-end planning: group by country, then select a window per country.

use tracing::{debug, info};

use crate::error::Result;
use crate::grouper::group_by_country;
use crate::model::{CountryReport, CountryResult, Partner};
use crate::selector::{collect_candidates, select_best};
use crate::window::AdjacencyPolicy;

/// Knobs for a planning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlannerOptions {
    /// How each partner's dates are scanned for consecutive days.
    pub adjacency: AdjacencyPolicy,
}

/// Plan with default options (list-order adjacency).
pub fn plan(partners: &[Partner]) -> Result<Vec<CountryResult>> {
    plan_with(partners, &PlannerOptions::default())
}

/// Compute one [`CountryResult`] per distinct country in `partners`.
///
/// Results are ordered by country name. Countries where nobody has two
/// consecutive days still get a zero-attendee result.
///
/// # Errors
/// Returns `PlannerError::MalformedDate` for the first unparseable date; no
/// results are produced in that case.
pub fn plan_with(partners: &[Partner], options: &PlannerOptions) -> Result<Vec<CountryResult>> {
    let groups = group_by_country(partners);
    debug!(
        partners = partners.len(),
        countries = groups.len(),
        policy = ?options.adjacency,
        "grouped partners"
    );

    let mut results = Vec::with_capacity(groups.len());
    for (country, members) in groups {
        let candidates = collect_candidates(members, options.adjacency)?;
        debug!(country, candidates = candidates.len(), "collected candidate windows");
        results.push(select_best(country, candidates));
    }

    info!(
        countries = results.len(),
        scheduled = results.iter().filter(|r| r.start_date.is_some()).count(),
        "planning complete"
    );
    Ok(results)
}

/// Same as [`plan_with`], wrapped in the `{"countries": [...]}` document form.
pub fn plan_report(partners: &[Partner], options: &PlannerOptions) -> Result<CountryReport> {
    Ok(CountryReport {
        countries: plan_with(partners, options)?,
    })
}
