pub mod config;
pub mod db;
pub mod errors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use sqlx::PgPool;

use crate::store::{PgWellnessStore, WellnessStore};

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Read-only aggregate queries used by the dashboard and statistics.
    pub store: Arc<dyn WellnessStore>,
    pub config: config::AppConfig,
}

impl AppState {
    /// State whose aggregate reads go to the same Postgres pool as everything else.
    pub fn new(db: PgPool, config: config::AppConfig) -> Self {
        let store = Arc::new(PgWellnessStore::new(db.clone()));
        Self { db, store, config }
    }
}
