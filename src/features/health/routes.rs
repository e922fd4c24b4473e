use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::health::handlers;
use crate::features::health::services::HealthService;

/// Create routes for the health feature
pub fn routes(service: Arc<HealthService>) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/test-db", get(handlers::test_db))
        .with_state(service)
}
