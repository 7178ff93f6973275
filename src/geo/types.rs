//! Coordinate and region value types.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::error_handling::ValidationError;
use crate::geo::containment::{is_in_circle, is_in_polygon};

/// Latitude/longitude pair in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, expected in `[-90, 90]`
    pub lat: f64,
    /// Longitude, expected in `[-180, 180]`
    pub lng: f64,
}

impl GeoPoint {
    /// Builds a point without checking ranges.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a point, rejecting non-finite or out-of-range coordinates.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self, ValidationError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::LatitudeOutOfRange(lat));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(ValidationError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }

    /// Builds a point from two optional coordinates.
    ///
    /// Returns `None` unless both are present.
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => Some(Self { lat, lng }),
            _ => None,
        }
    }
}

/// Circular geofence: a center and a radius in kilometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleRegion {
    /// Center of the circle
    pub center: GeoPoint,
    /// Radius in kilometers
    pub radius_km: f64,
}

impl CircleRegion {
    /// Builds a circle. The radius is not checked.
    pub const fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self { center, radius_km }
    }

    /// Boundary-inclusive containment. A negative radius contains nothing.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        is_in_circle(point, self)
    }
}

/// Polygonal geofence.
///
/// The ring is implicitly closed: the last point connects back to the first.
/// Repeating the first vertex at the end adds a zero-length edge and changes
/// nothing. Fewer than three vertices is a degenerate region that contains
/// nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolygonRegion {
    /// Ring vertices in order
    pub points: Vec<GeoPoint>,
}

impl PolygonRegion {
    /// Builds a polygon from its vertices.
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// `true` when the ring has fewer than three vertices.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    /// Even-odd containment; see [`is_in_polygon`].
    pub fn contains(&self, point: &GeoPoint) -> bool {
        is_in_polygon(point, &self.points)
    }
}

/// Discriminant of a [`Region`], serialized as `CIRCLE` / `POLYGON`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionKind {
    /// Circular geofence
    Circle,
    /// Polygonal geofence
    Polygon,
}

/// A geofence of either shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Region {
    /// Circular geofence
    Circle(CircleRegion),
    /// Polygonal geofence
    Polygon(PolygonRegion),
}

impl Region {
    /// Which shape this region is.
    pub fn kind(&self) -> RegionKind {
        match self {
            Region::Circle(_) => RegionKind::Circle,
            Region::Polygon(_) => RegionKind::Polygon,
        }
    }

    /// Containment test for either shape.
    pub fn contains(&self, point: &GeoPoint) -> bool {
        match self {
            Region::Circle(circle) => circle.contains(point),
            Region::Polygon(polygon) => polygon.contains(point),
        }
    }
}

impl From<CircleRegion> for Region {
    fn from(circle: CircleRegion) -> Self {
        Region::Circle(circle)
    }
}

impl From<PolygonRegion> for Region {
    fn from(polygon: PolygonRegion) -> Self {
        Region::Polygon(polygon)
    }
}
