//! Query inputs and result shapes.

use serde::{Deserialize, Serialize};

use crate::geo::{GeoPoint, RegionKind};

/// A record that may carry a location.
///
/// Implementors return `None` unless both coordinates are known.
pub trait Locatable {
    /// Where the record is, if both coordinates are known.
    fn location(&self) -> Option<GeoPoint>;
}

impl Locatable for GeoPoint {
    fn location(&self) -> Option<GeoPoint> {
        Some(*self)
    }
}

impl<T: Locatable + ?Sized> Locatable for &T {
    fn location(&self) -> Option<GeoPoint> {
        (**self).location()
    }
}

/// A record annotated with its distance to a query center.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithDistance<T> {
    /// The matched record
    #[serde(flatten)]
    pub record: T,
    /// Great-circle distance to the query center
    pub distance_km: f64,
}

/// Result of a radius search.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearResult<'a, T> {
    /// Search center
    pub center: GeoPoint,
    /// Search radius in kilometers
    pub radius_km: f64,
    /// Matches ordered by ascending distance
    pub matches: Vec<WithDistance<&'a T>>,
}

/// Result of a geofence membership query.
#[derive(Debug, Clone, Serialize)]
pub struct RegionMatches<'a, T> {
    /// Shape that was queried
    pub region: RegionKind,
    /// Number of matches
    pub count: usize,
    /// Matches in input order
    pub matches: Vec<&'a T>,
}

/// A labelled reference point such as a campaign office or landmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    /// Display name
    pub label: String,
    /// Location
    pub point: GeoPoint,
}

impl Centroid {
    /// Builds a centroid.
    pub fn new(label: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            label: label.into(),
            point,
        }
    }
}

/// Records within range of one centroid, nearest first.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProximityGroup<'a, T> {
    /// Label of the centroid
    pub label: String,
    /// Location of the centroid
    pub center: GeoPoint,
    /// Number of records in range
    pub count: usize,
    /// Records in range, nearest first
    pub matches: Vec<WithDistance<&'a T>>,
}
