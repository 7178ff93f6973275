// Shared test helpers for database setup and test data creation.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::Path;
use std::sync::Arc;

use sqlx::SqlitePool;

use voter_geo::api::{router, AppState};
use voter_geo::storage::{init_db_pool_with_path, insert_voter, NewVoter};
use voter_geo::run_migrations;

/// Downtown São Paulo, used as the reference point across tests
#[allow(dead_code)]
pub const CENTER: (f64, f64) = (-23.5505, -46.6333);

/// Kilometers per degree of latitude on the spherical Earth model
#[allow(dead_code)]
pub const KM_PER_DEGREE_LAT: f64 = 111.195;

/// Opens a file-backed database with migrations applied.
pub async fn create_test_pool_with_path(db_path: &Path) -> Arc<SqlitePool> {
    let pool = init_db_pool_with_path(db_path)
        .await
        .expect("Failed to create test database");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Inserts a voter `km_north` kilometers due north of [`CENTER`] and returns its id.
#[allow(dead_code)]
pub async fn insert_voter_north(pool: &SqlitePool, name: &str, km_north: f64) -> i64 {
    let voter = NewVoter::located(name, CENTER.0 + km_north / KM_PER_DEGREE_LAT, CENTER.1);
    insert_voter(pool, &voter)
        .await
        .expect("Failed to insert voter")
}

/// Inserts a voter with raw coordinate text, as a legacy import might have stored it.
#[allow(dead_code)]
pub async fn insert_raw_voter(
    pool: &SqlitePool,
    name: &str,
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> i64 {
    let voter = NewVoter {
        full_name: name.to_string(),
        latitude: latitude.map(str::to_string),
        longitude: longitude.map(str::to_string),
        ..Default::default()
    };
    insert_voter(pool, &voter)
        .await
        .expect("Failed to insert voter")
}

/// Serves the API on an ephemeral port and returns its base URL.
#[allow(dead_code)]
pub async fn spawn_api(pool: Arc<SqlitePool>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    let app = router(AppState { pool });
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{}", addr)
}
