//! Circle and polygon containment predicates.

use crate::geo::distance::distance_km;
use crate::geo::{CircleRegion, GeoPoint};

/// Returns `true` if `point` lies within `region`, edge included.
///
/// A radius of zero matches only the center itself. A negative radius
/// matches nothing, since distances are never negative.
pub fn is_in_circle(point: &GeoPoint, region: &CircleRegion) -> bool {
    distance_km(point, &region.center) <= region.radius_km
}

/// Even-odd ray casting test against an implicitly closed ring.
///
/// Longitude is treated as `x` and latitude as `y`; a ray is cast eastward
/// from `point` and every edge it crosses flips the result. Rings with fewer
/// than three vertices contain nothing.
///
/// Points lying exactly on an edge or vertex get whatever the arithmetic
/// yields. Rings crossing the antimeridian are not handled.
pub fn is_in_polygon(point: &GeoPoint, polygon: &[GeoPoint]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let (x, y) = (point.lng, point.lat);
    let mut inside = false;
    let mut j = polygon.len() - 1;

    for (i, vertex) in polygon.iter().enumerate() {
        let (xi, yi) = (vertex.lng, vertex.lat);
        let (xj, yj) = (polygon[j].lng, polygon[j].lat);

        // The first clause guarantees yi != yj, so the division is safe
        let crosses = (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi;
        if crosses {
            inside = !inside;
        }
        j = i;
    }

    inside
}
