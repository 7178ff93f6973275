//! voter_geo library: geofencing and proximity queries over voter records
//!
//! The core is a small, pure geometry library ([`geo`]) and the query
//! patterns built on it ([`query`]): radius search, geofence membership and
//! grouping around labelled centroids. Around it sit a SQLite-backed voter
//! store ([`storage`]) and an HTTP API ([`api`]).
//!
//! # Example
//!
//! ```
//! use voter_geo::geo::{CircleRegion, GeoPoint, Region};
//! use voter_geo::query::find_in_region;
//!
//! let homes = vec![GeoPoint::new(-23.5505, -46.6333), GeoPoint::new(-23.6505, -46.7333)];
//! let office = CircleRegion::new(GeoPoint::new(-23.5505, -46.6333), 1.0);
//!
//! let inside = find_in_region(&homes, &Region::Circle(office));
//! assert_eq!(inside.count, 1);
//! ```
//!
//! # Requirements
//!
//! The storage and API layers require a Tokio runtime. The geometric core and
//! query patterns are synchronous and need nothing.

#![warn(missing_docs)]

pub mod api;
pub mod config;
mod error_handling;
pub mod geo;
pub mod initialization;
pub mod query;
pub mod seed;
pub mod storage;

// Re-export public API
pub use config::{Command, Config, LogFormat, LogLevel, Opt};
pub use error_handling::{DatabaseError, InitializationError, SeedError, ValidationError};
pub use run::{run_group, run_near, run_region, run_seed, serve};
pub use storage::run_migrations;

// Command runners shared by the binary and integration tests
mod run {
    use std::path::Path;
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::info;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sqlx::SqlitePool;

    use crate::api::{
        start_api_server, AppState, NearQuery, NearResponse, ProximityRequest, ProximityResponse,
        RegionRequest, RegionResponse,
    };
    use crate::config::Config;
    use crate::geo::{GeoPoint, Region};
    use crate::query::{find_in_region, find_near, group_by_proximity};
    use crate::seed::{seed_voters, SeedOptions, SeedReport};
    use crate::storage::{
        count_voters, fetch_locatable_voters, init_db_pool_with_path, run_migrations,
    };

    /// Opens the database at `db_path` and brings its schema up to date.
    async fn open_store(db_path: &Path) -> Result<Arc<SqlitePool>> {
        let pool = init_db_pool_with_path(db_path)
            .await
            .context("Failed to initialize database pool")?;
        run_migrations(&pool)
            .await
            .context("Failed to run database migrations")?;
        Ok(pool)
    }

    /// Runs the HTTP API with the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated, or the
    /// port cannot be bound.
    pub async fn serve(config: Config) -> Result<()> {
        let pool = open_store(&config.db_path).await?;
        let total = count_voters(&pool)
            .await
            .context("Failed to count voters")?;
        info!(
            "Serving {} voters from {}",
            total,
            config.db_path.display()
        );

        start_api_server(config.port, AppState { pool }).await
    }

    /// Radius search against the store, returned as the API's JSON body.
    pub async fn run_near(db_path: &Path, query: NearQuery) -> Result<serde_json::Value> {
        let search = query.validate()?;
        let pool = open_store(db_path).await?;
        let voters = fetch_locatable_voters(&pool)
            .await
            .context("Failed to load voters")?;

        let result = find_near(&voters, search.center, search.radius_km, search.limit);
        Ok(serde_json::to_value(NearResponse::from(result))?)
    }

    /// Geofence membership for a region definition in JSON.
    pub async fn run_region(db_path: &Path, region_json: &str) -> Result<serde_json::Value> {
        let request: RegionRequest =
            serde_json::from_str(region_json).context("Invalid region definition")?;
        let region = Region::try_from(request)?;
        let pool = open_store(db_path).await?;
        let voters = fetch_locatable_voters(&pool)
            .await
            .context("Failed to load voters")?;

        let result = find_in_region(&voters, &region);
        Ok(serde_json::to_value(RegionResponse::from(result))?)
    }

    /// Proximity grouping for a centroid list in JSON.
    pub async fn run_group(db_path: &Path, request_json: &str) -> Result<serde_json::Value> {
        let request: ProximityRequest =
            serde_json::from_str(request_json).context("Invalid centroid list")?;
        let (centroids, max_distance_km) = request.validate()?;
        let pool = open_store(db_path).await?;
        let voters = fetch_locatable_voters(&pool)
            .await
            .context("Failed to load voters")?;

        let groups = group_by_proximity(&voters, &centroids, max_distance_km);
        Ok(serde_json::to_value(ProximityResponse::from(groups))?)
    }

    /// Inserts random demo voters around `center`.
    pub async fn run_seed(
        db_path: &Path,
        count: usize,
        center: GeoPoint,
        spread_km: f64,
        missing_ratio: f64,
    ) -> Result<SeedReport> {
        let options = SeedOptions {
            count,
            center,
            spread_km,
            missing_ratio,
        };
        options.validate()?;
        let pool = open_store(db_path).await?;

        let mut rng = StdRng::from_rng(&mut rand::rng());
        let report = seed_voters(&pool, &options, &mut rng)
            .await
            .context("Failed to insert demo voters")?;
        Ok(report)
    }
}
