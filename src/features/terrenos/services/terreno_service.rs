use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::terrenos::dtos::{CreateTerrenoDto, TerrenoResponseDto, UpdateTerrenoDto};
use crate::features::terrenos::models::Terreno;

/// Service for land plot operations
pub struct TerrenoService {
    pool: PgPool,
}

impl TerrenoService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all plots, newest-first. An empty table yields an empty list.
    pub async fn list(&self) -> Result<Vec<TerrenoResponseDto>> {
        let terrenos = sqlx::query_as::<_, Terreno>(
            r#"
            SELECT id, nombre, latitud, longitud
            FROM terrenos
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list terrenos: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(terrenos.into_iter().map(|t| t.into()).collect())
    }

    /// Register a new plot and return its generated id
    pub async fn create(&self, dto: CreateTerrenoDto) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO terrenos (nombre, latitud, longitud)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&dto.nombre)
        .bind(dto.latitud)
        .bind(dto.longitud)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert terreno: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Terreno created: id={}, nombre={}", id, dto.nombre);

        Ok(id)
    }

    /// Rename a plot. Only the `nombre` column is mutated.
    pub async fn rename(&self, terreno_id: i32, dto: UpdateTerrenoDto) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE terrenos
            SET nombre = $1
            WHERE id = $2
            "#,
        )
        .bind(&dto.nombre)
        .bind(terreno_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update terreno {}: {:?}", terreno_id, e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Terreno {} not found",
                terreno_id
            )));
        }

        tracing::info!("Terreno renamed: id={}, nombre={}", terreno_id, dto.nombre);

        Ok(())
    }

    /// Remove a plot. Its comments are removed by the schema-level cascade.
    pub async fn delete(&self, terreno_id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM terrenos WHERE id = $1")
            .bind(terreno_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete terreno {}: {:?}", terreno_id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "Terreno {} not found",
                terreno_id
            )));
        }

        tracing::info!("Terreno deleted: id={}", terreno_id);

        Ok(())
    }
}
