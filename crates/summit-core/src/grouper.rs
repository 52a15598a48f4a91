//! Partition partners into per-country buckets.

use std::collections::BTreeMap;

use crate::model::Partner;

/// Group partners by their `country` field.
///
/// Every partner lands in exactly one bucket, in input order. Countries iterate
/// in ascending name order, which only affects presentation.
pub fn group_by_country(partners: &[Partner]) -> BTreeMap<&str, Vec<&Partner>> {
    let mut groups: BTreeMap<&str, Vec<&Partner>> = BTreeMap::new();
    for partner in partners {
        groups.entry(partner.country.as_str()).or_default().push(partner);
    }
    groups
}
