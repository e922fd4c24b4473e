use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::comentarios::handlers;
use crate::features::comentarios::services::ComentarioService;

/// Create routes for the comentarios feature
pub fn routes(service: Arc<ComentarioService>) -> Router {
    Router::new()
        .route("/comentarios", post(handlers::create_comentario))
        // One path template: GET reads it as a plot id, PUT/DELETE as a comment id
        .route(
            "/comentarios/{id}",
            get(handlers::list_comentarios)
                .put(handlers::update_comentario)
                .delete(handlers::delete_comentario),
        )
        .with_state(service)
}
