pub mod artists;
pub mod shows;
pub mod venues;

use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::{pages, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/health", get(|| async { "OK" }))
        .merge(venues::routes())
        .merge(artists::routes())
        .merge(shows::routes())
}

async fn home() -> Html<String> {
    Html(pages::home(None))
}

/// Router fallback for unknown paths.
pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(pages::not_found("page")))
}
