//! Great-circle distance.

use crate::config::EARTH_RADIUS_KM;
use crate::geo::GeoPoint;

/// Haversine distance between two points, in kilometers.
///
/// Uses a spherical Earth of radius [`EARTH_RADIUS_KM`], which is accurate
/// enough for city-scale work but not geodetically exact. The result is
/// symmetric, never negative, and zero for identical points.
///
/// # Example
///
/// ```
/// use voter_geo::geo::{distance_km, GeoPoint};
///
/// let a = GeoPoint::new(0.0, 0.0);
/// let b = GeoPoint::new(1.0, 0.0);
/// // One degree of latitude is roughly 111 km
/// assert!((distance_km(&a, &b) - 111.19).abs() < 0.1);
/// ```
pub fn distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Rounding can push h a hair outside [0, 1] for near-antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
