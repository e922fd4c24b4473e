use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::terrenos::dtos::{
    CreateTerrenoDto, TerrenoCreatedDto, TerrenoResponseDto, UpdateTerrenoDto,
};
use crate::features::terrenos::services::TerrenoService;
use crate::shared::types::StatusResponse;

/// List all registered plots, newest-first
#[utoipa::path(
    get,
    path = "/terrenos",
    responses(
        (status = 200, description = "All plots ordered by id descending", body = Vec<TerrenoResponseDto>),
    ),
    tag = "terrenos"
)]
pub async fn list_terrenos(
    State(service): State<Arc<TerrenoService>>,
) -> Result<Json<Vec<TerrenoResponseDto>>> {
    let terrenos = service.list().await?;
    Ok(Json(terrenos))
}

/// Register a new plot with its coordinates
#[utoipa::path(
    post,
    path = "/terrenos",
    request_body = CreateTerrenoDto,
    responses(
        (status = 201, description = "Plot registered", body = TerrenoCreatedDto),
        (status = 400, description = "Missing or empty fields")
    ),
    tag = "terrenos"
)]
pub async fn create_terreno(
    State(service): State<Arc<TerrenoService>>,
    AppJson(dto): AppJson<CreateTerrenoDto>,
) -> Result<(StatusCode, Json<TerrenoCreatedDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(TerrenoCreatedDto::new(id))))
}

/// Rename an existing plot
#[utoipa::path(
    put,
    path = "/terrenos/{terreno_id}",
    params(
        ("terreno_id" = i32, Path, description = "Plot id")
    ),
    request_body = UpdateTerrenoDto,
    responses(
        (status = 200, description = "Plot renamed", body = StatusResponse),
        (status = 400, description = "Empty name"),
        (status = 404, description = "Plot not found")
    ),
    tag = "terrenos"
)]
pub async fn update_terreno(
    State(service): State<Arc<TerrenoService>>,
    Path(terreno_id): Path<i32>,
    AppJson(dto): AppJson<UpdateTerrenoDto>,
) -> Result<Json<StatusResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.rename(terreno_id, dto).await?;
    Ok(Json(StatusResponse::ok()))
}

/// Remove a plot and, via the schema cascade, its comments
#[utoipa::path(
    delete,
    path = "/terrenos/{terreno_id}",
    params(
        ("terreno_id" = i32, Path, description = "Plot id")
    ),
    responses(
        (status = 200, description = "Plot removed", body = StatusResponse),
        (status = 404, description = "Plot not found")
    ),
    tag = "terrenos"
)]
pub async fn delete_terreno(
    State(service): State<Arc<TerrenoService>>,
    Path(terreno_id): Path<i32>,
) -> Result<Json<StatusResponse>> {
    service.delete(terreno_id).await?;
    Ok(Json(StatusResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::terrenos::routes;
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    // Lazy pool: requests that fail validation never touch the database.
    fn test_router() -> axum::Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/agrovida_test")
            .unwrap();
        routes::routes(Arc::new(TerrenoService::new(pool)))
    }

    #[tokio::test]
    async fn create_with_missing_coordinate_returns_400() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .post("/terrenos")
            .json(&json!({"nombre": "Parcela Norte", "latitud": 4.6}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_missing_nombre_returns_400() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .post("/terrenos")
            .json(&json!({"latitud": 4.6, "longitud": -74.1}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn create_with_empty_nombre_returns_400_error_body() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .post("/terrenos")
            .json(&json!({"nombre": "", "latitud": 0, "longitud": 0}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn update_with_empty_nombre_returns_400() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server.put("/terrenos/1").json(&json!({"nombre": ""})).await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
