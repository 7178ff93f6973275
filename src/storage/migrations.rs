//! Database migration management.
//!
//! The SQL files under `migrations/` are embedded at compile time, so an
//! installed binary can bring any database up to date on its own.

use sqlx::migrate::Migrator;
use sqlx::{Pool, Sqlite};

use crate::error_handling::DatabaseError;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies every embedded migration that has not run yet.
pub async fn run_migrations(pool: &Pool<Sqlite>) -> Result<(), DatabaseError> {
    MIGRATOR.run(pool).await?;
    Ok(())
}
