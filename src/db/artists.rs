//! Artist row operations.

use sqlx::SqlitePool;

use crate::models::{Artist, NewArtist};

pub async fn list_all(pool: &SqlitePool) -> sqlx::Result<Vec<Artist>> {
    sqlx::query_as::<_, Artist>("SELECT * FROM artists ORDER BY id")
        .fetch_all(pool)
        .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> sqlx::Result<Option<Artist>> {
    sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Insert an artist and return their new id.
pub async fn insert(pool: &SqlitePool, artist: &NewArtist) -> sqlx::Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, genres, image_link, facebook_link,
            website, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.genres)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Overwrite every mutable field of the artist. Returns false when no
/// row has that id.
pub async fn update(pool: &SqlitePool, id: i64, artist: &NewArtist) -> sqlx::Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE artists
        SET name = ?, city = ?, state = ?, phone = ?, genres = ?,
            image_link = ?, facebook_link = ?, website = ?,
            seeking_venue = ?, seeking_description = ?
        WHERE id = ?
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(&artist.genres)
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    fn sample_artist() -> NewArtist {
        NewArtist {
            name: "Guns N Petals".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: Some("326-123-5000".to_string()),
            genres: Some("Rock n Roll".to_string()),
            image_link: Some("https://images.example.com/guns-n-petals.jpg".to_string()),
            facebook_link: None,
            website: Some("https://gunsnpetalsband.com".to_string()),
            seeking_venue: true,
            seeking_description: None,
        }
    }

    #[tokio::test]
    async fn insert_then_find_roundtrips_fields() {
        let db = Database::new("sqlite::memory:", 1).await.unwrap();
        db.run_migrations().await.unwrap();

        let id = insert(&db.pool, &sample_artist()).await.unwrap();
        let artist = find_by_id(&db.pool, id).await.unwrap().expect("artist not found");

        assert_eq!(artist.name, "Guns N Petals");
        assert_eq!(artist.website.as_deref(), Some("https://gunsnpetalsband.com"));
        assert!(artist.seeking_venue);
        assert!(artist.facebook_link.is_none());
    }

    #[tokio::test]
    async fn find_missing_id_returns_none() {
        let db = Database::new("sqlite::memory:", 1).await.unwrap();
        db.run_migrations().await.unwrap();

        assert!(find_by_id(&db.pool, 42).await.unwrap().is_none());
    }
}
