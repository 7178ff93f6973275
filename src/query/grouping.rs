//! Multi-centroid proximity grouping.

use log::debug;

use crate::query::near::within_radius;
use crate::query::types::{Centroid, Locatable, ProximityGroup};

/// Builds one group per centroid holding every record within
/// `max_distance_km`, nearest first.
///
/// Centroids are evaluated independently, so a record in range of several
/// centroids shows up in each of their groups. Groups come back in the same
/// order as `centroids`.
pub fn group_by_proximity<'a, T: Locatable>(
    records: &'a [T],
    centroids: &[Centroid],
    max_distance_km: f64,
) -> Vec<ProximityGroup<'a, T>> {
    centroids
        .iter()
        .map(|centroid| {
            let matches = within_radius(records, &centroid.point, max_distance_km);
            debug!(
                "Centroid '{}': {} records within {} km",
                centroid.label,
                matches.len(),
                max_distance_km
            );
            ProximityGroup {
                label: centroid.label.clone(),
                center: centroid.point,
                count: matches.len(),
                matches,
            }
        })
        .collect()
}
