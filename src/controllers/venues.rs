use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::forms::{describe_errors, SearchForm, VenueForm};
use crate::services::listings;
use crate::{db, pages, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route("/venues/{id}", get(venue_detail).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(edit_venue))
}

// GET /venues
async fn list_venues(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let venues = db::venues::list_all(&state.db.pool).await?;

    let mut with_shows = Vec::with_capacity(venues.len());
    for venue in venues {
        let shows = db::shows::for_venue(&state.db.pool, venue.id).await?;
        with_shows.push((venue, shows));
    }

    let groups = listings::group_venues_by_location(with_shows, Utc::now().naive_utc());
    Ok(Html(pages::venue_directory(&groups)))
}

// POST /venues/search
async fn search_venues(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> AppResult<Html<String>> {
    let venues = db::venues::list_all(&state.db.pool).await?;
    let results = listings::search_by_name(venues, &form.search_term);

    let now = Utc::now().naive_utc();
    let mut items = Vec::with_capacity(results.data.len());
    for venue in results.data {
        let shows = db::shows::for_venue(&state.db.pool, venue.id).await?;
        let (upcoming, _) = listings::partition_shows_by_time(shows, now);
        items.push(listings::ListingSummary {
            id: venue.id,
            name: venue.name,
            num_upcoming_shows: upcoming.len(),
        });
    }

    Ok(Html(pages::search_results(
        "Venue search",
        "/venues",
        &form.search_term,
        results.count,
        &items,
    )))
}

// GET /venues/{id}
async fn venue_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let venue = db::venues::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {id}")))?;

    let shows = db::shows::for_venue(&state.db.pool, id).await?;
    let (upcoming, past) = listings::partition_shows_by_time(shows, Utc::now().naive_utc());

    Ok(Html(pages::venue_detail(&venue, &upcoming, &past)))
}

// GET /venues/create
async fn create_venue_form() -> Html<String> {
    Html(pages::venue_form("/venues/create", "List a new venue", None, None))
}

// POST /venues/create
async fn create_venue(
    State(state): State<Arc<AppState>>,
    Form(form): Form<VenueForm>,
) -> Html<String> {
    let form = form.normalized();
    if let Err(errors) = form.validate() {
        return Html(pages::venue_form(
            "/venues/create",
            "List a new venue",
            None,
            Some(&describe_errors(&errors)),
        ));
    }

    let name = form.name.clone();
    match db::venues::insert(&state.db.pool, &form.into_new()).await {
        Ok(id) => {
            tracing::info!("venue {} created as id {}", name, id);
            Html(pages::home(Some(&format!(
                "Venue {name} was successfully listed!"
            ))))
        }
        Err(err) => {
            tracing::error!("failed to create venue {}: {:?}", name, err);
            Html(pages::home(Some(&format!(
                "An error occurred. Venue {name} could not be listed."
            ))))
        }
    }
}

// DELETE /venues/{id}
async fn delete_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = db::venues::delete(&state.db.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("venue {id}")));
    }
    tracing::info!("venue {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

// GET /venues/{id}/edit
async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let venue = db::venues::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {id}")))?;

    Ok(Html(pages::venue_form(
        &format!("/venues/{id}/edit"),
        "Edit venue",
        Some(&venue),
        None,
    )))
}

// POST /venues/{id}/edit
async fn edit_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Form(form): Form<VenueForm>,
) -> AppResult<Response> {
    let venue = db::venues::find_by_id(&state.db.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("venue {id}")))?;

    let action = format!("/venues/{id}/edit");
    let form = form.normalized();
    if let Err(errors) = form.validate() {
        let page = pages::venue_form(
            &action,
            "Edit venue",
            Some(&venue),
            Some(&describe_errors(&errors)),
        );
        return Ok(Html(page).into_response());
    }

    match db::venues::update(&state.db.pool, id, &form.into_new()).await {
        Ok(_) => Ok(Redirect::to(&format!("/venues/{id}")).into_response()),
        Err(err) => {
            tracing::error!("failed to update venue {}: {:?}", id, err);
            let page = pages::venue_form(
                &action,
                "Edit venue",
                Some(&venue),
                Some("Error: Venue could not be updated"),
            );
            Ok(Html(page).into_response())
        }
    }
}
