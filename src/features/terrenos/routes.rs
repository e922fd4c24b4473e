use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::terrenos::handlers;
use crate::features::terrenos::services::TerrenoService;

/// Create routes for the terrenos feature
pub fn routes(service: Arc<TerrenoService>) -> Router {
    Router::new()
        .route(
            "/terrenos",
            get(handlers::list_terrenos).post(handlers::create_terreno),
        )
        .route(
            "/terrenos/{terreno_id}",
            put(handlers::update_terreno).delete(handlers::delete_terreno),
        )
        .with_state(service)
}
