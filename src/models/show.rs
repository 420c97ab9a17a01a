use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Field values for inserting a show row. Shows are immutable once
/// created, so there is no update path.
#[derive(Debug, Clone)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

/// A show row joined with the display fields of both of its endpoints.
/// This is what every page that renders shows works from; handlers never
/// traverse from a show to its artist or venue lazily.
#[derive(Debug, Clone, FromRow)]
pub struct ShowListing {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}
