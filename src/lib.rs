pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
pub mod forms;
pub mod models;
pub mod pages;
pub mod services;

use anyhow::Context;
use axum::Router;
use std::sync::Arc;

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub db: db::Database,
    pub config: config::Config,
}

impl AppState {
    pub async fn new(config: config::Config) -> anyhow::Result<Arc<Self>> {
        let db = db::Database::new(&config.database.url, config.database.pool_size)
            .await
            .context("failed to connect to database")?;

        db.run_migrations()
            .await
            .context("failed to run migrations")?;

        Ok(Arc::new(Self { db, config }))
    }
}

/// The full application router; main layers tracing on top of this and
/// the integration tests drive it directly.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(controllers::routes())
        .fallback(controllers::not_found)
        .with_state(state)
}
