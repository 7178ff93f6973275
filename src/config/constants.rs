//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including geometric parameters, query limits, and service defaults.

/// Mean Earth radius in kilometers used by the Haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Default SQLite database path
pub const DB_PATH: &str = "./voter_geo.db";

/// Default port for the HTTP API
pub const DEFAULT_PORT: u16 = 3000;

// Radius search limits
/// Matches returned by a radius search when the caller gives no limit
pub const DEFAULT_NEAR_LIMIT: usize = 50;
/// Upper bound accepted for a radius search limit
pub const MAX_NEAR_LIMIT: usize = 1000;

// Demo data generation
/// Default number of voters inserted by `seed`
pub const DEFAULT_SEED_COUNT: usize = 500;
/// Default scatter radius around the seed center, in kilometers
pub const DEFAULT_SEED_SPREAD_KM: f64 = 10.0;
/// Default share of seeded voters left without coordinates
pub const DEFAULT_SEED_MISSING_RATIO: f64 = 0.1;

/// Connections held by the SQLite pool
pub const MAX_DB_CONNECTIONS: u32 = 5;
