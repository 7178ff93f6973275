//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Error applying schema migrations.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
}

/// Request input rejected before it reaches the query core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Latitude is not finite or lies outside `[-90, 90]`.
    #[error("latitude must be a finite number between -90 and 90, got {0}")]
    LatitudeOutOfRange(f64),

    /// Longitude is not finite or lies outside `[-180, 180]`.
    #[error("longitude must be a finite number between -180 and 180, got {0}")]
    LongitudeOutOfRange(f64),

    /// Radius or distance is negative or not finite.
    #[error("radius must be a finite, non-negative number of kilometers, got {0}")]
    InvalidRadius(f64),

    /// Polygon has fewer than three vertices.
    #[error("polygon needs at least 3 points, got {0}")]
    TooFewPolygonPoints(usize),

    /// Proximity request without centroids.
    #[error("at least one centroid is required")]
    NoCentroids,

    /// Centroid label is empty or whitespace.
    #[error("centroid label must not be empty")]
    EmptyCentroidLabel,

    /// Ratio outside `[0, 1]`.
    #[error("ratio must be between 0 and 1, got {0}")]
    InvalidRatio(f64),

    /// Result limit is zero or above the maximum.
    #[error("limit must be between 1 and {max}, got {got}")]
    InvalidLimit {
        /// Requested limit
        got: usize,
        /// Largest accepted limit
        max: usize,
    },
}

/// Error types for demo data seeding.
#[derive(Error, Debug)]
pub enum SeedError {
    /// Seed options were rejected before anything was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Inserting the generated voters failed.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}
