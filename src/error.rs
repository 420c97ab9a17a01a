use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::pages;

#[derive(Debug, Error)]
pub enum AppError {
    /// Requested entity does not exist (404 page)
    #[error("not found: {0}")]
    NotFound(String),

    /// Persistence fault surfacing outside a flash-handled path (500 page)
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(what) => {
                (StatusCode::NOT_FOUND, Html(pages::not_found(&what))).into_response()
            }
            AppError::Database(err) => {
                tracing::error!("database error: {:?}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::server_error())).into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
