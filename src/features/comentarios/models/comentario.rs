use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::comentarios::dtos::ComentarioResponseDto;

/// Database model for a plot comment
#[derive(Debug, Clone, FromRow)]
pub struct Comentario {
    pub id: i32,
    pub terreno_id: i32,
    pub texto: String,
    pub fecha: DateTime<Utc>,
}

impl From<Comentario> for ComentarioResponseDto {
    fn from(c: Comentario) -> Self {
        Self {
            id: c.id,
            texto: c.texto,
            fecha: c.fecha,
        }
    }
}
