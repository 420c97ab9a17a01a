//! Show row operations.
//!
//! Reads come back pre-joined with artist and venue display fields, so
//! page assembly never follows a foreign key lazily.

use sqlx::SqlitePool;

use crate::models::{NewShow, ShowListing};

const LISTING_SELECT: &str = r#"
    SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
           s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
           s.start_time
    FROM shows s
    JOIN venues v ON v.id = s.venue_id
    JOIN artists a ON a.id = s.artist_id
"#;

pub async fn list_with_details(pool: &SqlitePool) -> sqlx::Result<Vec<ShowListing>> {
    let query = format!("{LISTING_SELECT} ORDER BY s.start_time");
    sqlx::query_as::<_, ShowListing>(&query).fetch_all(pool).await
}

pub async fn for_venue(pool: &SqlitePool, venue_id: i64) -> sqlx::Result<Vec<ShowListing>> {
    let query = format!("{LISTING_SELECT} WHERE s.venue_id = ? ORDER BY s.start_time");
    sqlx::query_as::<_, ShowListing>(&query)
        .bind(venue_id)
        .fetch_all(pool)
        .await
}

pub async fn for_artist(pool: &SqlitePool, artist_id: i64) -> sqlx::Result<Vec<ShowListing>> {
    let query = format!("{LISTING_SELECT} WHERE s.artist_id = ? ORDER BY s.start_time");
    sqlx::query_as::<_, ShowListing>(&query)
        .bind(artist_id)
        .fetch_all(pool)
        .await
}

/// Insert a show and return its new id. Fails on an unknown artist or
/// venue id (foreign key violation).
pub async fn insert(pool: &SqlitePool, show: &NewShow) -> sqlx::Result<i64> {
    let result = sqlx::query(
        "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)",
    )
    .bind(show.venue_id)
    .bind(show.artist_id)
    .bind(show.start_time)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}
