//! Radius search.

use log::debug;

use crate::geo::{distance_km, GeoPoint};
use crate::query::types::{Locatable, NearResult, WithDistance};

/// Returns records within `radius_km` of `center`, nearest first, keeping at
/// most `limit` of them.
///
/// Records at equal distance keep their input order. A negative radius
/// matches nothing.
///
/// # Example
///
/// ```
/// use voter_geo::geo::GeoPoint;
/// use voter_geo::query::find_near;
///
/// let points = vec![GeoPoint::new(0.0, 0.02), GeoPoint::new(0.0, 0.01)];
/// let result = find_near(&points, GeoPoint::new(0.0, 0.0), 5.0, 10);
/// assert_eq!(result.matches[0].record, &points[1]);
/// ```
pub fn find_near<T: Locatable>(
    records: &[T],
    center: GeoPoint,
    radius_km: f64,
    limit: usize,
) -> NearResult<'_, T> {
    let mut matches = within_radius(records, &center, radius_km);
    matches.truncate(limit);
    debug!(
        "Radius search: {} candidates, {} matches within {} km",
        records.len(),
        matches.len(),
        radius_km
    );

    NearResult {
        center,
        radius_km,
        matches,
    }
}

/// Every located record within `radius_km` of `center`, sorted by distance.
pub(crate) fn within_radius<'a, T: Locatable>(
    records: &'a [T],
    center: &GeoPoint,
    radius_km: f64,
) -> Vec<WithDistance<&'a T>> {
    let mut matches: Vec<WithDistance<&'a T>> = records
        .iter()
        .filter_map(|record| {
            let point = record.location()?;
            let distance = distance_km(&point, center);
            (distance <= radius_km).then_some(WithDistance {
                record,
                distance_km: distance,
            })
        })
        .collect();

    // sort_by is stable, so ties keep input order
    matches.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    matches
}
