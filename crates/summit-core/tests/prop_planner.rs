//! Property-based tests for the planner using proptest.
//!
//! These check the invariants that must hold for *any* partner dataset, not
//! just the sample fixture in `planner_tests.rs`.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use summit_core::{plan, plan_with, AdjacencyPolicy, Partner, PlannerOptions};

// ---------------------------------------------------------------------------
// Strategies — small pools so collisions (shared dates, ties) are common
// ---------------------------------------------------------------------------

const COUNTRIES: [&str; 4] = ["Ireland", "Spain", "United States", "Japan"];

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2017, 4, 25).unwrap()
}

fn arb_date() -> impl Strategy<Value = String> {
    (0i64..14).prop_map(|offset| (base_date() + Duration::days(offset)).to_string())
}

fn arb_partner() -> impl Strategy<Value = Partner> {
    (
        0usize..8,
        0usize..COUNTRIES.len(),
        prop::collection::vec(arb_date(), 0..6),
    )
        .prop_map(|(id, country, dates)| Partner {
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            email: format!("p{id}@x.com"),
            country: COUNTRIES[country].to_string(),
            available_dates: dates,
        })
}

/// Partners whose date lists are sorted ascending without duplicates.
fn arb_sorted_partner() -> impl Strategy<Value = Partner> {
    arb_partner().prop_map(|mut p| {
        p.available_dates.sort();
        p.available_dates.dedup();
        p
    })
}

fn arb_partners() -> impl Strategy<Value = Vec<Partner>> {
    prop::collection::vec(arb_partner(), 0..20)
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// List-adjacent consecutive-day start dates for one partner.
fn list_adjacent_starts(p: &Partner) -> BTreeSet<NaiveDate> {
    p.available_dates
        .windows(2)
        .filter_map(|pair| {
            let (a, b) = (parse(&pair[0]), parse(&pair[1]));
            (a + Duration::days(1) == b).then_some(a)
        })
        .collect()
}

/// Brute-force attendee sets per start date for one country.
fn oracle(partners: &[Partner], country: &str) -> BTreeMap<NaiveDate, BTreeSet<String>> {
    let mut out: BTreeMap<NaiveDate, BTreeSet<String>> = BTreeMap::new();
    for p in partners.iter().filter(|p| p.country == country) {
        for start in list_adjacent_starts(p) {
            out.entry(start).or_default().insert(p.email.clone());
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Property 1: one result per distinct country
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn one_result_per_country(partners in arb_partners()) {
        let results = plan(&partners).unwrap();
        let countries: BTreeSet<&str> = partners.iter().map(|p| p.country.as_str()).collect();
        let names: BTreeSet<&str> = results.iter().map(|r| r.name.as_str()).collect();

        prop_assert_eq!(results.len(), countries.len());
        prop_assert_eq!(names, countries);
    }
}

// ---------------------------------------------------------------------------
// Property 2: count matches attendees; empty iff no start date
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn count_matches_attendees(partners in arb_partners()) {
        for r in plan(&partners).unwrap() {
            prop_assert_eq!(r.attendee_count, r.attendees.len());
            prop_assert_eq!(r.attendee_count == 0, r.start_date.is_none());

            let unique: BTreeSet<&String> = r.attendees.iter().collect();
            prop_assert_eq!(unique.len(), r.attendees.len(), "duplicate attendee in {:?}", r);
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: idempotence
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn planning_twice_gives_same_results(partners in arb_partners()) {
        prop_assert_eq!(plan(&partners).unwrap(), plan(&partners).unwrap());
    }
}

// ---------------------------------------------------------------------------
// Property 4: chosen date has the max attendee count and is the earliest such
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn chosen_date_is_earliest_maximum(partners in arb_partners()) {
        for r in plan(&partners).unwrap() {
            let sets = oracle(&partners, &r.name);
            let max = sets.values().map(BTreeSet::len).max().unwrap_or(0);
            let earliest = sets
                .iter()
                .find(|(_, emails)| emails.len() == max)
                .map(|(date, _)| *date);

            prop_assert_eq!(r.attendee_count, max);
            prop_assert_eq!(r.start_date, earliest);
            if let Some(start) = r.start_date {
                let expected: Vec<String> = sets[&start].iter().cloned().collect();
                prop_assert_eq!(&r.attendees, &expected);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: every attendee has a list-adjacent pair starting on the date
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn attendees_have_list_adjacent_pair(partners in arb_partners()) {
        for r in plan(&partners).unwrap() {
            let Some(start) = r.start_date else { continue };
            for email in &r.attendees {
                let qualifies = partners.iter().any(|p| {
                    p.country == r.name
                        && &p.email == email
                        && list_adjacent_starts(p).contains(&start)
                });
                prop_assert!(qualifies, "{} has no pair starting {} in {}", email, start, r.name);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 6: both adjacency policies agree on pre-sorted input
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn policies_agree_on_sorted_lists(
        partners in prop::collection::vec(arb_sorted_partner(), 0..20)
    ) {
        let sorted = PlannerOptions { adjacency: AdjacencyPolicy::Sorted };
        prop_assert_eq!(plan(&partners).unwrap(), plan_with(&partners, &sorted).unwrap());
    }
}

// ---------------------------------------------------------------------------
// Property 7: sorted policy never finds fewer attendees than list order
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn sorted_policy_never_loses_attendees(partners in arb_partners()) {
        let sorted = PlannerOptions { adjacency: AdjacencyPolicy::Sorted };
        let by_list = plan(&partners).unwrap();
        let by_sorted = plan_with(&partners, &sorted).unwrap();

        for (a, b) in by_list.iter().zip(&by_sorted) {
            prop_assert_eq!(&a.name, &b.name);
            prop_assert!(b.attendee_count >= a.attendee_count);
        }
    }
}
