//! Geometric core: coordinates, regions and containment predicates.
//!
//! Everything in this module is pure and synchronous. Values are built per
//! request from caller-supplied coordinates and dropped afterwards.
//!
//! - [`distance_km`]: Haversine great-circle distance on a spherical Earth
//! - [`is_in_circle`]: boundary-inclusive circle containment
//! - [`is_in_polygon`]: even-odd ray casting over an implicitly closed ring
//!
//! Coordinates are not range-checked here. Use [`GeoPoint::try_new`] at the
//! edge of the system to reject out-of-range input before it reaches these
//! functions.

mod containment;
mod distance;
mod types;

pub use containment::{is_in_circle, is_in_polygon};
pub use distance::distance_km;
pub use types::{CircleRegion, GeoPoint, PolygonRegion, Region, RegionKind};

#[cfg(test)]
mod tests;
