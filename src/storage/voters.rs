//! Voter table access.
//!
//! Coordinates are stored as TEXT. This module is the only place that turns
//! them into numbers: a pair that does not parse, or parses to a point
//! outside the WGS84 ranges, is treated as missing, so the query core only
//! ever sees valid locations.

use futures::TryStreamExt;
use log::debug;
use sqlx::{Executor, Row, Sqlite, SqlitePool};

use crate::error_handling::DatabaseError;
use crate::geo::GeoPoint;

use super::models::{NewVoter, VoterRecord};

/// Parses a stored coordinate, returning `None` for blanks and junk.
pub fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Turns a stored coordinate pair into a location, if it is a valid one.
fn stored_location(id: i64, raw_lat: Option<&str>, raw_lng: Option<&str>) -> Option<GeoPoint> {
    let (Some(lat), Some(lng)) = (parse_coordinate(raw_lat), parse_coordinate(raw_lng)) else {
        debug!(
            "Voter {} has unparsable coordinates ({:?}, {:?})",
            id, raw_lat, raw_lng
        );
        return None;
    };
    match GeoPoint::try_new(lat, lng) {
        Ok(point) => Some(point),
        Err(e) => {
            debug!("Voter {} has out-of-range coordinates: {}", id, e);
            None
        }
    }
}

/// Loads every voter whose latitude and longitude columns are both set.
///
/// Rows whose stored coordinates fail to parse or fall outside the valid
/// ranges are still returned, with both coordinates set to `None`, so they
/// drop out of geographic queries.
pub async fn fetch_locatable_voters(pool: &SqlitePool) -> Result<Vec<VoterRecord>, DatabaseError> {
    let mut rows = sqlx::query(
        "SELECT id, full_name, address, neighborhood, latitude, longitude
         FROM voters
         WHERE latitude IS NOT NULL AND longitude IS NOT NULL
         ORDER BY id",
    )
    .fetch(pool);

    let mut voters = Vec::new();
    while let Some(row) = rows.try_next().await? {
        let id: i64 = row.get("id");
        let raw_lat: Option<String> = row.get("latitude");
        let raw_lng: Option<String> = row.get("longitude");

        let location = stored_location(id, raw_lat.as_deref(), raw_lng.as_deref());

        voters.push(VoterRecord {
            id,
            full_name: row.get("full_name"),
            address: row.get("address"),
            neighborhood: row.get("neighborhood"),
            latitude: location.map(|p| p.lat),
            longitude: location.map(|p| p.lng),
        });
    }

    debug!("Loaded {} voters with coordinates", voters.len());
    Ok(voters)
}

/// Inserts a voter and returns its id.
///
/// Accepts a pool or an open transaction.
pub async fn insert_voter<'e, E>(executor: E, voter: &NewVoter) -> Result<i64, DatabaseError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO voters (full_name, address, neighborhood, latitude, longitude, created_at)
         VALUES (?, ?, ?, ?, ?, ?)
         RETURNING id",
    )
    .bind(&voter.full_name)
    .bind(&voter.address)
    .bind(&voter.neighborhood)
    .bind(&voter.latitude)
    .bind(&voter.longitude)
    .bind(chrono::Utc::now().timestamp_millis())
    .fetch_one(executor)
    .await?;
    Ok(id)
}

/// Total number of voters, located or not.
pub async fn count_voters(pool: &SqlitePool) -> Result<i64, DatabaseError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM voters")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::run_migrations;
    use sqlx::sqlite::SqlitePoolOptions;

    /// A single connection keeps every query on the same in-memory database.
    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to create test database pool");
        run_migrations(&pool)
            .await
            .expect("Failed to run migrations");
        pool
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate(Some("-23.5505")), Some(-23.5505));
        assert_eq!(parse_coordinate(Some("  46.6 ")), Some(46.6));
        assert_eq!(parse_coordinate(Some("12")), Some(12.0));
        assert_eq!(parse_coordinate(Some("")), None);
        assert_eq!(parse_coordinate(Some("   ")), None);
        assert_eq!(parse_coordinate(Some("north")), None);
        assert_eq!(parse_coordinate(Some("NaN")), None);
        assert_eq!(parse_coordinate(Some("inf")), None);
        assert_eq!(parse_coordinate(None), None);
    }

    #[tokio::test]
    async fn test_insert_and_fetch_round_trip() {
        let pool = memory_pool().await;
        let mut voter = NewVoter::located("Ana Souza", -23.5505, -46.6333);
        voter.neighborhood = Some("Sé".to_string());
        let id = insert_voter(&pool, &voter).await.unwrap();

        let voters = fetch_locatable_voters(&pool).await.unwrap();
        assert_eq!(voters.len(), 1);
        assert_eq!(voters[0].id, id);
        assert_eq!(voters[0].full_name, "Ana Souza");
        assert_eq!(voters[0].neighborhood.as_deref(), Some("Sé"));
        assert_eq!(voters[0].latitude, Some(-23.5505));
        assert_eq!(voters[0].longitude, Some(-46.6333));
    }

    #[tokio::test]
    async fn test_fetch_skips_null_coordinates() {
        let pool = memory_pool().await;
        insert_voter(&pool, &NewVoter::unlocated("No Address"))
            .await
            .unwrap();
        let mut half = NewVoter::unlocated("Half Located");
        half.latitude = Some("-23.55".to_string());
        insert_voter(&pool, &half).await.unwrap();
        insert_voter(&pool, &NewVoter::located("Located", 1.0, 2.0))
            .await
            .unwrap();

        let voters = fetch_locatable_voters(&pool).await.unwrap();
        assert_eq!(voters.len(), 1);
        assert_eq!(voters[0].full_name, "Located");
        assert_eq!(count_voters(&pool).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_fetch_keeps_unparsable_rows_without_location() {
        use crate::query::Locatable;

        let pool = memory_pool().await;
        let mut junk = NewVoter::unlocated("Typo");
        junk.latitude = Some("-23,55".to_string());
        junk.longitude = Some("-46.63".to_string());
        insert_voter(&pool, &junk).await.unwrap();

        let voters = fetch_locatable_voters(&pool).await.unwrap();
        assert_eq!(voters.len(), 1);
        assert_eq!(voters[0].latitude, None);
        assert_eq!(voters[0].longitude, None);
        assert!(voters[0].location().is_none());
    }

    #[tokio::test]
    async fn test_fetch_drops_out_of_range_coordinates() {
        use crate::geo::{PolygonRegion, Region};
        use crate::query::{find_in_region, find_near};

        let pool = memory_pool().await;
        for (name, lat, lng) in [
            ("Wrapped", "0", "360.0"),
            ("Past The Pole", "95", "0"),
            ("Origin", "0", "0"),
        ] {
            let mut voter = NewVoter::unlocated(name);
            voter.latitude = Some(lat.to_string());
            voter.longitude = Some(lng.to_string());
            insert_voter(&pool, &voter).await.unwrap();
        }

        let voters = fetch_locatable_voters(&pool).await.unwrap();
        assert_eq!(voters.len(), 3);
        assert_eq!(voters[0].longitude, None);
        assert_eq!(voters[1].latitude, None);
        assert_eq!(voters[2].latitude, Some(0.0));

        // Radius and polygon queries agree on who is at the origin
        let near = find_near(&voters, GeoPoint::new(0.0, 0.0), 1.0, 10);
        let square = Region::Polygon(PolygonRegion::new(vec![
            GeoPoint::new(-1.0, -1.0),
            GeoPoint::new(-1.0, 1.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(1.0, -1.0),
        ]));
        let inside = find_in_region(&voters, &square);
        assert_eq!(near.matches.len(), 1);
        assert_eq!(near.matches[0].record.full_name, "Origin");
        assert_eq!(inside.count, 1);
        assert_eq!(inside.matches[0].full_name, "Origin");
    }
}
