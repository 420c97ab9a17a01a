use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::forms::{describe_errors, ArtistForm, SearchForm};
use crate::services::listings;
use crate::{db, pages, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route("/artists/{id}", get(artist_detail))
        .route("/artists/{id}/edit", get(edit_artist_form).post(edit_artist))
}

// GET /artists
async fn list_artists(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let artists = db::artists::list_all(&state.db.pool).await?;
    Ok(Html(pages::artist_directory(&artists)))
}

// POST /artists/search
async fn search_artists(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let artists = db::artists::list_all(&state.db.pool).await?;
    let results = listings::search_by_name(artists, &form.search_term);

    let now = Utc::now().naive_utc();
    let mut items = Vec::with_capacity(results.data.len());
    for artist in results.data {
        let shows = db::shows::for_artist(&state.db.pool, artist.id).await?;
        let (upcoming, _) = listings::partition_shows_by_time(shows, now);
        items.push(listings::ListingSummary {
            id: artist.id,
            name: artist.name,
            num_upcoming_shows: upcoming.len(),
        });
    }

    Ok(Html(pages::search_results(
        "Artist search",
        "/artists",
        &form.search_term,
        results.count,
        &items,
    )))
}

// GET /artists/{id}
async fn artist_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let artist = db::artists::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artist {id}")))?;

    let shows = db::shows::for_artist(&state.db.pool, id).await?;
    let (upcoming, past) = listings::partition_shows_by_time(shows, Utc::now().naive_utc());

    Ok(Html(pages::artist_detail(&artist, &upcoming, &past)))
}

// GET /artists/create
async fn create_artist_form() -> Html<String> {
    Html(pages::artist_form("/artists/create", "List a new artist", None, None))
}

// POST /artists/create
async fn create_artist(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ArtistForm>,
) -> Html<String> {
    let form = form.normalized();
    if let Err(errors) = form.validate() {
        return Html(pages::artist_form(
            "/artists/create",
            "List a new artist",
            None,
            Some(&describe_errors(&errors)),
        ));
    }

    let name = form.name.clone();
    match db::artists::insert(&state.db.pool, &form.into_new()).await {
        Ok(id) => {
            tracing::info!("artist {} created as id {}", name, id);
            Html(pages::home(Some(&format!(
                "Artist {name} was successfully listed!"
            ))))
        }
        Err(err) => {
            tracing::error!("failed to create artist {}: {:?}", name, err);
            Html(pages::home(Some(&format!(
                "An error occurred. Artist {name} could not be listed."
            ))))
        }
    }
}

// GET /artists/{id}/edit
async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let artist = db::artists::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artist {id}")))?;

    Ok(Html(pages::artist_form(
        &format!("/artists/{id}/edit"),
        "Edit artist",
        Some(&artist),
        None,
    )))
}

// POST /artists/{id}/edit
async fn edit_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<ArtistForm>,
) -> AppResult<Response> {
    let artist = db::artists::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("artist {id}")))?;

    let action = format!("/artists/{id}/edit");
    let form = form.normalized();
    if let Err(errors) = form.validate() {
        let page = pages::artist_form(
            &action,
            "Edit artist",
            Some(&artist),
            Some(&describe_errors(&errors)),
        );
        return Ok(Html(page).into_response());
    }

    match db::artists::update(&state.db.pool, id, &form.into_new()).await {
        Ok(_) => Ok(Redirect::to(&format!("/artists/{id}")).into_response()),
        Err(err) => {
            tracing::error!("failed to update artist {}: {:?}", id, err);
            let page = pages::artist_form(
                &action,
                "Edit artist",
                Some(&artist),
                Some("Error: Artist could not be updated"),
            );
            Ok(Html(page).into_response())
        }
    }
}
