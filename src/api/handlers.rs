//! Route handlers.
//!
//! Each handler validates its input, loads the located voters, runs the
//! synchronous query, and serializes the result while the records are still
//! borrowed.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::info;
use serde_json::json;

use super::error::ApiError;
use super::types::{
    NearQuery, NearResponse, ProximityRequest, ProximityResponse, RegionRequest, RegionResponse,
};
use super::AppState;
use crate::geo::Region;
use crate::query::{find_in_region, find_near, group_by_proximity};
use crate::storage::fetch_locatable_voters;

/// Liveness probe.
pub async fn health_handler() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// `GET /voters/near`
pub async fn near_handler(
    State(state): State<AppState>,
    Query(query): Query<NearQuery>,
) -> Result<Response, ApiError> {
    let search = query.validate()?;
    let voters = fetch_locatable_voters(&state.pool).await?;

    let result = find_near(&voters, search.center, search.radius_km, search.limit);
    info!(
        "near ({}, {}) r={}km: {} of {} voters",
        search.center.lat,
        search.center.lng,
        search.radius_km,
        result.matches.len(),
        voters.len()
    );
    Ok(Json(NearResponse::from(result)).into_response())
}

/// `POST /voters/in-region`
pub async fn region_handler(
    State(state): State<AppState>,
    Json(request): Json<RegionRequest>,
) -> Result<Response, ApiError> {
    let region = Region::try_from(request)?;
    let voters = fetch_locatable_voters(&state.pool).await?;

    let result = find_in_region(&voters, &region);
    info!(
        "in-region {}: {} of {} voters",
        result.region,
        result.count,
        voters.len()
    );
    Ok(Json(RegionResponse::from(result)).into_response())
}

/// `POST /voters/by-proximity`
pub async fn proximity_handler(
    State(state): State<AppState>,
    Json(request): Json<ProximityRequest>,
) -> Result<Response, ApiError> {
    let (centroids, max_distance_km) = request.validate()?;
    let voters = fetch_locatable_voters(&state.pool).await?;

    let groups = group_by_proximity(&voters, &centroids, max_distance_km);
    info!(
        "by-proximity: {} centroids within {}km over {} voters",
        groups.len(),
        max_distance_km,
        voters.len()
    );
    Ok(Json(ProximityResponse::from(groups)).into_response())
}
