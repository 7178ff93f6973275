//! Geofence membership.

use log::debug;

use crate::geo::Region;
use crate::query::types::{Locatable, RegionMatches};

/// Returns the located records that fall inside `region`, in input order.
pub fn find_in_region<'a, T: Locatable>(records: &'a [T], region: &Region) -> RegionMatches<'a, T> {
    let matches: Vec<&'a T> = records
        .iter()
        .filter(|record| {
            record
                .location()
                .is_some_and(|point| region.contains(&point))
        })
        .collect();

    debug!(
        "{} geofence: {} of {} candidates inside",
        region.kind(),
        matches.len(),
        records.len()
    );

    RegionMatches {
        region: region.kind(),
        count: matches.len(),
        matches,
    }
}
