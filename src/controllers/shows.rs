use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Form, Router};
use std::sync::Arc;
use validator::Validate;

use crate::error::AppResult;
use crate::forms::{describe_errors, ShowForm};
use crate::{db, pages, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}

// GET /shows
async fn list_shows(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let shows = db::shows::list_with_details(&state.db.pool).await?;
    Ok(Html(pages::show_directory(&shows)))
}

// GET /shows/create
async fn create_show_form() -> Html<String> {
    Html(pages::show_form(None))
}

// POST /shows/create
async fn create_show(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ShowForm>,
) -> Html<String> {
    if let Err(errors) = form.validate() {
        return Html(pages::show_form(Some(&describe_errors(&errors))));
    }

    let Some(start_time) = form.parsed_start_time() else {
        return Html(pages::show_form(Some(
            "start time must be a valid date and time",
        )));
    };

    // An unknown artist or venue id fails the foreign key here and takes
    // the generic failure path.
    match db::shows::insert(&state.db.pool, &form.into_new(start_time)).await {
        Ok(id) => {
            tracing::info!("show {} created", id);
            Html(pages::home(Some("Show was successfully listed!")))
        }
        Err(err) => {
            tracing::error!("failed to create show: {:?}", err);
            Html(pages::home(Some(
                "An error occurred. Show could not be listed.",
            )))
        }
    }
}
