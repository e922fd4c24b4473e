use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::features::health::dtos::DbTimeDto;
use crate::features::health::services::HealthService;
use crate::shared::types::ErrorResponse;

pub const LIVENESS_MESSAGE: &str = "Servicio AgroVida activo";

/// Static liveness message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = String),
    ),
    tag = "health"
)]
pub async fn home() -> &'static str {
    LIVENESS_MESSAGE
}

/// Store connectivity check: runs a trivial query and reports the store's
/// current time. This is the one endpoint whose error body echoes the
/// underlying store message, as a connection diagnostic.
#[utoipa::path(
    get,
    path = "/test-db",
    responses(
        (status = 200, description = "Store reachable", body = DbTimeDto),
        (status = 500, description = "Store unreachable", body = ErrorResponse)
    ),
    tag = "health"
)]
pub async fn test_db(State(service): State<Arc<HealthService>>) -> Response {
    match service.db_time().await {
        Ok(db_time) => Json(DbTimeDto::new(db_time)).into_response(),
        Err(e) => {
            tracing::error!("Store connectivity check failed: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::health::routes;
    use axum_test::TestServer;
    use sqlx::postgres::PgPoolOptions;

    fn test_router() -> axum::Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/agrovida_test")
            .unwrap();
        routes::routes(Arc::new(HealthService::new(pool)))
    }

    #[tokio::test]
    async fn home_returns_liveness_message() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        response.assert_text(LIVENESS_MESSAGE);
    }
}
