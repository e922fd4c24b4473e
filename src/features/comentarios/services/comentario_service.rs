use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::comentarios::dtos::{
    ComentarioResponseDto, CreateComentarioDto, UpdateComentarioDto,
};
use crate::features::comentarios::models::Comentario;

/// Convert database errors to more specific AppError values.
/// A foreign key violation means the referenced plot does not exist.
fn handle_db_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        // PostgreSQL error code 23503: foreign key violation
        if db_err.code() == Some(std::borrow::Cow::Borrowed("23503")) {
            return AppError::BadRequest(
                "terreno_id does not reference an existing terreno".to_string(),
            );
        }
    }

    AppError::Database(e)
}

/// Service for plot comment operations
pub struct ComentarioService {
    pool: PgPool,
}

impl ComentarioService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the comments of one plot, newest-first.
    /// An unknown plot id yields an empty list; existence is not pre-checked.
    pub async fn list_for_terreno(&self, terreno_id: i32) -> Result<Vec<ComentarioResponseDto>> {
        let comentarios = sqlx::query_as::<_, Comentario>(
            r#"
            SELECT id, terreno_id, texto, fecha
            FROM comentarios
            WHERE terreno_id = $1
            ORDER BY fecha DESC
            "#,
        )
        .bind(terreno_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list comentarios for terreno {}: {:?}", terreno_id, e);
            AppError::Database(e)
        })?;

        Ok(comentarios.into_iter().map(|c| c.into()).collect())
    }

    /// Attach a comment to a plot. The store assigns `fecha`; both the
    /// generated id and timestamp are returned to the caller.
    pub async fn create(&self, dto: CreateComentarioDto) -> Result<(i32, DateTime<Utc>)> {
        let (id, fecha) = sqlx::query_as::<_, (i32, DateTime<Utc>)>(
            r#"
            INSERT INTO comentarios (terreno_id, texto)
            VALUES ($1, $2)
            RETURNING id, fecha
            "#,
        )
        .bind(dto.terreno_id)
        .bind(&dto.texto)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert comentario: {:?}", e);
            handle_db_error(e)
        })?;

        tracing::info!("Comentario created: id={}, terreno_id={}", id, dto.terreno_id);

        Ok((id, fecha))
    }

    /// Edit a comment's text. Only the `texto` column is mutated.
    pub async fn update_texto(&self, comentario_id: i32, dto: UpdateComentarioDto) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE comentarios
            SET texto = $1
            WHERE id = $2
            "#,
        )
        .bind(&dto.texto)
        .bind(comentario_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update comentario {}: {:?}", comentario_id, e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Comentario {} not found",
                comentario_id
            )));
        }

        tracing::info!("Comentario updated: id={}", comentario_id);

        Ok(())
    }

    /// Remove a comment
    pub async fn delete(&self, comentario_id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM comentarios WHERE id = $1")
            .bind(comentario_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete comentario {}: {:?}", comentario_id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Comentario {} not found",
                comentario_id
            )));
        }

        tracing::info!("Comentario deleted: id={}", comentario_id);

        Ok(())
    }
}
