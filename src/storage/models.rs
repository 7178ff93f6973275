//! Voter row types.

use serde::Serialize;

use crate::geo::GeoPoint;
use crate::query::Locatable;

/// A voter row with its coordinates already parsed.
///
/// Coordinates that were missing or unparsable in the database are `None`;
/// such voters never match a geographic query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoterRecord {
    /// Row id
    pub id: i64,
    /// Full name
    pub full_name: String,
    /// Street address
    pub address: Option<String>,
    /// Neighborhood or district
    pub neighborhood: Option<String>,
    /// Parsed latitude
    pub latitude: Option<f64>,
    /// Parsed longitude
    pub longitude: Option<f64>,
}

impl Locatable for VoterRecord {
    fn location(&self) -> Option<GeoPoint> {
        GeoPoint::from_parts(self.latitude, self.longitude)
    }
}

/// A voter to insert. Coordinates are stored verbatim as text.
#[derive(Debug, Clone, Default)]
pub struct NewVoter {
    /// Full name
    pub full_name: String,
    /// Street address
    pub address: Option<String>,
    /// Neighborhood or district
    pub neighborhood: Option<String>,
    /// Latitude text
    pub latitude: Option<String>,
    /// Longitude text
    pub longitude: Option<String>,
}

impl NewVoter {
    /// A voter with numeric coordinates.
    pub fn located(full_name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            full_name: full_name.into(),
            latitude: Some(lat.to_string()),
            longitude: Some(lng.to_string()),
            ..Default::default()
        }
    }

    /// A voter without coordinates.
    pub fn unlocated(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Default::default()
        }
    }
}
