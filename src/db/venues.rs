//! Venue row operations.

use sqlx::SqlitePool;

use crate::models::{NewVenue, Venue};

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<Venue>> {
    sqlx::query_as::<_, Venue>("SELECT * FROM venues ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Venue>> {
    sqlx::query_as::<_, Venue>("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert a venue and return its new id.
pub async fn insert(pool: &SqlitePool, venue: &NewVenue) -> sqlx::Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, image_link, facebook_link,
            genres, website, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.genres)
    .bind(&venue.website)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every mutable field of the venue. Returns false when no row
/// has that id.
pub async fn update(pool: &SqlitePool, id: i64, venue: &NewVenue) -> sqlx::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE venues
        SET name = ?, city = ?, state = ?, address = ?, phone = ?,
            image_link = ?, facebook_link = ?, genres = ?, website = ?,
            seeking_talent = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.genres)
    .bind(&venue.website)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a venue. Its shows go with it via the foreign key cascade.
/// Returns false when no row has that id.
pub async fn delete(pool: &SqlitePool, id: i64) -> sqlx::Result<bool> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn sample_venue() -> NewVenue {
        NewVenue {
            name: "The Blue Note".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            address: "1015 Folsom Street".to_string(),
            phone: Some("123-123-1234".to_string()),
            image_link: None,
            facebook_link: Some("https://www.facebook.com/thebluenote".to_string()),
            genres: Some("Jazz,Reggae".to_string()),
            website: None,
            seeking_talent: true,
            seeking_description: Some("Looking for local acts".to_string()),
        }
    }

    #[tokio::test]
    async fn insert_then_find_roundtrips_fields() {
        let db = Database::new("sqlite::memory:", 1).await.unwrap();
        db.run_migrations().await.unwrap();

        let id = insert(&db.pool, &sample_venue()).await.unwrap();
        let venue = find_by_id(&db.pool, id).await.unwrap().expect("venue not found");

        assert_eq!(venue.name, "The Blue Note");
        assert_eq!(venue.city, "San Francisco");
        assert_eq!(venue.genres.as_deref(), Some("Jazz,Reggae"));
        assert!(venue.seeking_talent);
    }

    #[tokio::test]
    async fn update_overwrites_and_reports_missing_rows() {
        let db = Database::new("sqlite::memory:", 1).await.unwrap();
        db.run_migrations().await.unwrap();

        let id = insert(&db.pool, &sample_venue()).await.unwrap();

        let mut changed = sample_venue();
        changed.name = "The Red Note".to_string();
        changed.seeking_talent = false;
        assert!(update(&db.pool, id, &changed).await.unwrap());

        let venue = find_by_id(&db.pool, id).await.unwrap().unwrap();
        assert_eq!(venue.name, "The Red Note");
        assert!(!venue.seeking_talent);

        assert!(!update(&db.pool, id + 1, &changed).await.unwrap());
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let db = Database::new("sqlite::memory:", 1).await.unwrap();
        db.run_migrations().await.unwrap();

        let id = insert(&db.pool, &sample_venue()).await.unwrap();
        assert!(delete(&db.pool, id).await.unwrap());
        assert!(find_by_id(&db.pool, id).await.unwrap().is_none());
        assert!(!delete(&db.pool, id).await.unwrap());
    }
}
