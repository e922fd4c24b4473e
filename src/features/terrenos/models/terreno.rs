use sqlx::FromRow;

use crate::features::terrenos::dtos::TerrenoResponseDto;

/// Database model for a land plot
#[derive(Debug, Clone, FromRow)]
pub struct Terreno {
    pub id: i32,
    pub nombre: String,
    pub latitud: f64,
    pub longitud: f64,
}

impl From<Terreno> for TerrenoResponseDto {
    fn from(t: Terreno) -> Self {
        Self {
            id: t.id,
            nombre: t.nombre,
            latitud: t.latitud,
            longitud: t.longitud,
        }
    }
}
