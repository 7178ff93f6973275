//! Demo data generation.
//!
//! Scatters random voters uniformly over a disc around a center point so the
//! API has something to query. A configurable share of voters is inserted
//! without coordinates, mirroring real rolls where geocoding failed.

use log::info;
use rand::Rng;
use sqlx::SqlitePool;

use crate::error_handling::{DatabaseError, SeedError, ValidationError};
use crate::geo::GeoPoint;
use crate::storage::{insert_voter, NewVoter};

/// Kilometers per degree of latitude on the spherical Earth model
const KM_PER_DEGREE_LAT: f64 = 111.195;

const FIRST_NAMES: &[&str] = &[
    "Ana", "Bruno", "Carla", "Diego", "Elisa", "Fábio", "Gabriela", "Heitor", "Isabela", "João",
    "Karina", "Lucas", "Marina", "Nicolas", "Olívia", "Pedro", "Renata", "Sérgio", "Tatiana",
    "Vitor",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Barbosa", "Costa", "Dias", "Ferreira", "Gomes", "Lima", "Martins", "Oliveira",
    "Pereira", "Ribeiro", "Santos", "Silva", "Souza",
];

/// Parameters for [`generate_voters`] and [`seed_voters`].
#[derive(Debug, Clone)]
pub struct SeedOptions {
    /// Number of voters to generate
    pub count: usize,
    /// Point the voters are scattered around
    pub center: GeoPoint,
    /// Radius of the scatter disc in kilometers
    pub spread_km: f64,
    /// Share of voters generated without coordinates, in `[0, 1]`
    pub missing_ratio: f64,
}

impl SeedOptions {
    /// Checks the center and ratios before any rows are written.
    pub fn validate(&self) -> Result<(), ValidationError> {
        GeoPoint::try_new(self.center.lat, self.center.lng)?;
        if !self.spread_km.is_finite() || self.spread_km < 0.0 {
            return Err(ValidationError::InvalidRadius(self.spread_km));
        }
        if !(0.0..=1.0).contains(&self.missing_ratio) {
            return Err(ValidationError::InvalidRatio(self.missing_ratio));
        }
        Ok(())
    }
}

/// Summary of a seeding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    /// Rows written
    pub inserted: usize,
    /// Rows written without coordinates
    pub without_coordinates: usize,
}

/// Builds `count` random voters around the center.
///
/// # Errors
///
/// Returns the [`SeedOptions::validate`] error for an out-of-range center,
/// spread or ratio.
pub fn generate_voters<R: Rng>(
    options: &SeedOptions,
    rng: &mut R,
) -> Result<Vec<NewVoter>, ValidationError> {
    options.validate()?;
    let voters = (0..options.count)
        .map(|i| {
            let name = format!(
                "{} {}",
                FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())],
                LAST_NAMES[rng.random_range(0..LAST_NAMES.len())]
            );

            if rng.random_bool(options.missing_ratio) {
                return NewVoter::unlocated(name);
            }

            let point = random_point_near(&options.center, options.spread_km, rng);
            let mut voter = NewVoter::located(name, point.lat, point.lng);
            voter.neighborhood = Some(format!("Sector {}", i % 12 + 1));
            voter
        })
        .collect();
    Ok(voters)
}

/// Uniform sample over a disc of `radius_km`, using a local flat-Earth
/// approximation that is fine at city scale.
///
/// Near the poles the longitude offset blows up; it is folded back into
/// `[-180, 180)` so every sample is a valid coordinate.
fn random_point_near<R: Rng>(center: &GeoPoint, radius_km: f64, rng: &mut R) -> GeoPoint {
    let r = radius_km * rng.random::<f64>().sqrt();
    let bearing = rng.random::<f64>() * std::f64::consts::TAU;

    let dlat = r * bearing.cos() / KM_PER_DEGREE_LAT;
    let lat_scale = center.lat.to_radians().cos().max(1e-6);
    let dlng = r * bearing.sin() / (KM_PER_DEGREE_LAT * lat_scale);

    GeoPoint::new(
        (center.lat + dlat).clamp(-90.0, 90.0),
        wrap_longitude(center.lng + dlng),
    )
}

/// Folds any finite longitude into `[-180, 180)`.
fn wrap_longitude(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

/// Generates and inserts voters in a single transaction.
pub async fn seed_voters<R: Rng>(
    pool: &SqlitePool,
    options: &SeedOptions,
    rng: &mut R,
) -> Result<SeedReport, SeedError> {
    let voters = generate_voters(options, rng)?;
    let without_coordinates = voters.iter().filter(|v| v.latitude.is_none()).count();

    let mut tx = pool.begin().await.map_err(DatabaseError::from)?;
    for voter in &voters {
        insert_voter(&mut *tx, voter).await?;
    }
    tx.commit().await.map_err(DatabaseError::from)?;

    info!(
        "Seeded {} voters around ({}, {}), {} without coordinates",
        voters.len(),
        options.center.lat,
        options.center.lng,
        without_coordinates
    );

    Ok(SeedReport {
        inserted: voters.len(),
        without_coordinates,
    })
}
