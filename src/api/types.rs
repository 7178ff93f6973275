//! Request and response bodies.
//!
//! Requests are deserialized as-is and then validated into core values, so
//! nothing out of range ever reaches the query functions. Responses borrow
//! the voters they list; build them while the loaded records are alive.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_NEAR_LIMIT, MAX_NEAR_LIMIT};
use crate::error_handling::ValidationError;
use crate::geo::{CircleRegion, GeoPoint, PolygonRegion, Region, RegionKind};
use crate::query::{Centroid, NearResult, ProximityGroup, RegionMatches, WithDistance};
use crate::storage::VoterRecord;

fn validate_radius(radius_km: f64) -> Result<f64, ValidationError> {
    if radius_km.is_finite() && radius_km >= 0.0 {
        Ok(radius_km)
    } else {
        Err(ValidationError::InvalidRadius(radius_km))
    }
}

/// Query string of `GET /voters/near`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearQuery {
    /// Center latitude
    pub lat: f64,
    /// Center longitude
    pub lng: f64,
    /// Search radius in kilometers
    pub radius_km: f64,
    /// Maximum number of voters, defaults to 50
    pub limit: Option<usize>,
}

/// A validated radius search.
#[derive(Debug, Clone, PartialEq)]
pub struct NearSearch {
    /// Validated center
    pub center: GeoPoint,
    /// Non-negative radius in kilometers
    pub radius_km: f64,
    /// Maximum number of matches
    pub limit: usize,
}

impl NearQuery {
    /// Checks coordinates, radius and limit, filling in the default limit.
    pub fn validate(&self) -> Result<NearSearch, ValidationError> {
        let center = GeoPoint::try_new(self.lat, self.lng)?;
        let radius_km = validate_radius(self.radius_km)?;
        let limit = self.limit.unwrap_or(DEFAULT_NEAR_LIMIT);
        if limit == 0 || limit > MAX_NEAR_LIMIT {
            return Err(ValidationError::InvalidLimit {
                got: limit,
                max: MAX_NEAR_LIMIT,
            });
        }
        Ok(NearSearch {
            center,
            radius_km,
            limit,
        })
    }
}

/// Latitude/longitude pair as it appears in request bodies.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// Body of `POST /voters/in-region`.
///
/// ```json
/// {"type": "CIRCLE", "centerLat": -23.55, "centerLng": -46.63, "radiusKm": 2}
/// {"type": "POLYGON", "points": [{"lat": 0, "lng": 0}, {"lat": 0, "lng": 1}, {"lat": 1, "lng": 1}]}
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum RegionRequest {
    /// Circle around a center point
    #[serde(rename_all = "camelCase")]
    Circle {
        /// Center latitude
        center_lat: f64,
        /// Center longitude
        center_lng: f64,
        /// Radius in kilometers
        radius_km: f64,
    },
    /// Implicitly closed ring of at least three vertices
    Polygon { points: Vec<LatLng> },
}

impl TryFrom<RegionRequest> for Region {
    type Error = ValidationError;

    fn try_from(request: RegionRequest) -> Result<Self, Self::Error> {
        match request {
            RegionRequest::Circle {
                center_lat,
                center_lng,
                radius_km,
            } => {
                let center = GeoPoint::try_new(center_lat, center_lng)?;
                let radius_km = validate_radius(radius_km)?;
                Ok(Region::Circle(CircleRegion::new(center, radius_km)))
            }
            RegionRequest::Polygon { points } => {
                let polygon = PolygonRegion::new(
                    points
                        .iter()
                        .map(|p| GeoPoint::try_new(p.lat, p.lng))
                        .collect::<Result<Vec<_>, _>>()?,
                );
                if polygon.is_degenerate() {
                    return Err(ValidationError::TooFewPolygonPoints(polygon.points.len()));
                }
                Ok(Region::Polygon(polygon))
            }
        }
    }
}

/// One entry of a proximity request.
#[derive(Debug, Clone, Deserialize)]
pub struct CentroidRequest {
    /// Group name echoed in the response
    pub label: String,
    /// Centroid latitude
    pub lat: f64,
    /// Centroid longitude
    pub lng: f64,
}

/// Body of `POST /voters/by-proximity`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityRequest {
    /// Reference points, one group each
    pub centroids: Vec<CentroidRequest>,
    /// Distance cutoff in kilometers
    pub max_distance_km: f64,
}

impl ProximityRequest {
    /// Checks every centroid and the cutoff, returning them as core values.
    pub fn validate(&self) -> Result<(Vec<Centroid>, f64), ValidationError> {
        if self.centroids.is_empty() {
            return Err(ValidationError::NoCentroids);
        }
        let max_distance_km = validate_radius(self.max_distance_km)?;
        let centroids = self
            .centroids
            .iter()
            .map(|c| {
                if c.label.trim().is_empty() {
                    return Err(ValidationError::EmptyCentroidLabel);
                }
                Ok(Centroid::new(c.label.clone(), GeoPoint::try_new(c.lat, c.lng)?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok((centroids, max_distance_km))
    }
}

/// Response of a radius search.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearResponse<'a> {
    /// Search center
    pub center: GeoPoint,
    /// Search radius in kilometers
    pub radius_km: f64,
    /// Number of voters returned
    pub count: usize,
    /// Matches, nearest first
    pub voters: Vec<WithDistance<&'a VoterRecord>>,
}

impl<'a> From<NearResult<'a, VoterRecord>> for NearResponse<'a> {
    fn from(result: NearResult<'a, VoterRecord>) -> Self {
        Self {
            center: result.center,
            radius_km: result.radius_km,
            count: result.matches.len(),
            voters: result.matches,
        }
    }
}

/// Response of a geofence membership query.
#[derive(Debug, Serialize)]
pub struct RegionResponse<'a> {
    /// Shape that was queried
    pub region: RegionKind,
    /// Number of voters inside
    pub count: usize,
    /// Matches in storage order
    pub voters: Vec<&'a VoterRecord>,
}

impl<'a> From<RegionMatches<'a, VoterRecord>> for RegionResponse<'a> {
    fn from(result: RegionMatches<'a, VoterRecord>) -> Self {
        Self {
            region: result.region,
            count: result.count,
            voters: result.matches,
        }
    }
}

/// One group of a proximity response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEntry<'a> {
    /// Centroid label
    pub label: String,
    /// Centroid latitude
    pub center_lat: f64,
    /// Centroid longitude
    pub center_lng: f64,
    /// Number of voters in range
    pub count: usize,
    /// Voters in range, nearest first
    pub voters: Vec<WithDistance<&'a VoterRecord>>,
}

/// Response of a proximity grouping query.
#[derive(Debug, Serialize)]
pub struct ProximityResponse<'a> {
    /// One entry per requested centroid, in request order
    pub groups: Vec<GroupEntry<'a>>,
}

impl<'a> From<Vec<ProximityGroup<'a, VoterRecord>>> for ProximityResponse<'a> {
    fn from(groups: Vec<ProximityGroup<'a, VoterRecord>>) -> Self {
        Self {
            groups: groups
                .into_iter()
                .map(|g| GroupEntry {
                    label: g.label,
                    center_lat: g.center.lat,
                    center_lng: g.center.lng,
                    count: g.count,
                    voters: g.matches,
                })
                .collect(),
        }
    }
}
