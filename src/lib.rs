// Library exports for the api binary and the integration tests
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod money;
pub mod routes;
pub mod services;

use std::sync::Arc;

use sqlx::SqlitePool;

use config::Config;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
}
