//! HTTP API over the voter store.
//!
//! Endpoints:
//! - `GET /health` - liveness probe
//! - `GET /voters/near?lat=&lng=&radiusKm=&limit=` - radius search, nearest first
//! - `POST /voters/in-region` - circle or polygon geofence membership
//! - `POST /voters/by-proximity` - voters grouped around labelled centroids
//!
//! Invalid coordinates, radii and polygons are rejected here with `400` and
//! a `{"error": "..."}` body; the query core assumes valid input.

mod error;
mod handlers;
mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use sqlx::SqlitePool;

use handlers::{health_handler, near_handler, proximity_handler, region_handler};

pub use error::ApiError;
pub use types::{
    CentroidRequest, GroupEntry, LatLng, NearQuery, NearResponse, NearSearch, ProximityRequest,
    ProximityResponse, RegionRequest, RegionResponse,
};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Voter store
    pub pool: Arc<SqlitePool>,
}

/// Builds the router with all routes attached.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/voters/near", get(near_handler))
        .route("/voters/in-region", post(region_handler))
        .route("/voters/by-proximity", post(proximity_handler))
        .with_state(state)
}

/// Serves the API on `127.0.0.1:<port>` until the process is stopped.
pub async fn start_api_server(port: u16, state: AppState) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind API server to port {}: {}", port, e))?;

    log::info!("API server listening on http://127.0.0.1:{}/", port);
    log::info!("  - Near:      GET  /voters/near");
    log::info!("  - Region:    POST /voters/in-region");
    log::info!("  - Proximity: POST /voters/by-proximity");

    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("API server error: {}", e))?;

    Ok(())
}
