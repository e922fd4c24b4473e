use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::comentarios::dtos::{
    ComentarioCreatedDto, ComentarioResponseDto, CreateComentarioDto, UpdateComentarioDto,
};
use crate::features::comentarios::services::ComentarioService;
use crate::shared::types::StatusResponse;

/// List the comments of one plot, newest-first
#[utoipa::path(
    get,
    path = "/comentarios/{id}",
    params(
        ("id" = i32, Path, description = "Plot id")
    ),
    responses(
        (status = 200, description = "Comments ordered by fecha descending", body = Vec<ComentarioResponseDto>),
    ),
    tag = "comentarios"
)]
pub async fn list_comentarios(
    State(service): State<Arc<ComentarioService>>,
    Path(terreno_id): Path<i32>,
) -> Result<Json<Vec<ComentarioResponseDto>>> {
    let comentarios = service.list_for_terreno(terreno_id).await?;
    Ok(Json(comentarios))
}

/// Attach a comment to a plot
#[utoipa::path(
    post,
    path = "/comentarios",
    request_body = CreateComentarioDto,
    responses(
        (status = 201, description = "Comment stored", body = ComentarioCreatedDto),
        (status = 400, description = "Missing or invalid terreno_id, or empty texto")
    ),
    tag = "comentarios"
)]
pub async fn create_comentario(
    State(service): State<Arc<ComentarioService>>,
    AppJson(dto): AppJson<CreateComentarioDto>,
) -> Result<(StatusCode, Json<ComentarioCreatedDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (id, fecha) = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(ComentarioCreatedDto::new(id, fecha))))
}

/// Edit a comment's text
#[utoipa::path(
    put,
    path = "/comentarios/{id}",
    params(
        ("id" = i32, Path, description = "Comment id")
    ),
    request_body = UpdateComentarioDto,
    responses(
        (status = 200, description = "Comment updated", body = StatusResponse),
        (status = 400, description = "Empty text"),
        (status = 404, description = "Comment not found")
    ),
    tag = "comentarios"
)]
pub async fn update_comentario(
    State(service): State<Arc<ComentarioService>>,
    Path(comentario_id): Path<i32>,
    AppJson(dto): AppJson<UpdateComentarioDto>,
) -> Result<Json<StatusResponse>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.update_texto(comentario_id, dto).await?;
    Ok(Json(StatusResponse::ok()))
}

/// Remove a comment
#[utoipa::path(
    delete,
    path = "/comentarios/{id}",
    params(
        ("id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment removed", body = StatusResponse),
        (status = 404, description = "Comment not found")
    ),
    tag = "comentarios"
)]
pub async fn delete_comentario(
    State(service): State<Arc<ComentarioService>>,
    Path(comentario_id): Path<i32>,
) -> Result<Json<StatusResponse>> {
    service.delete(comentario_id).await?;
    Ok(Json(StatusResponse::ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::comentarios::routes;
    use axum_test::TestServer;
    use serde_json::json;
    use sqlx::postgres::PgPoolOptions;

    // Lazy pool: requests that fail validation never touch the database.
    fn test_router() -> axum::Router {
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://postgres@localhost/agrovida_test")
            .unwrap();
        routes::routes(Arc::new(ComentarioService::new(pool)))
    }

    #[tokio::test]
    async fn create_with_non_numeric_terreno_id_returns_400() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .post("/comentarios")
            .json(&json!({"terreno_id": "abc", "texto": "Suelo arcilloso"}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "error");
    }

    #[tokio::test]
    async fn create_with_missing_texto_returns_400() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .post("/comentarios")
            .json(&json!({"terreno_id": 7}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn update_with_empty_texto_returns_400() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .put("/comentarios/1")
            .json(&json!({"texto": ""}))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
