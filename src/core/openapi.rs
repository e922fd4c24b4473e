use utoipa::{Modify, OpenApi};

use crate::features::comentarios::{dtos as comentarios_dtos, handlers as comentarios_handlers};
use crate::features::health::{dtos as health_dtos, handlers as health_handlers};
use crate::features::terrenos::{dtos as terrenos_dtos, handlers as terrenos_handlers};
use crate::shared::types::{ErrorResponse, StatusResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health_handlers::health_handler::home,
        health_handlers::health_handler::test_db,
        // Terrenos
        terrenos_handlers::terreno_handler::list_terrenos,
        terrenos_handlers::terreno_handler::create_terreno,
        terrenos_handlers::terreno_handler::update_terreno,
        terrenos_handlers::terreno_handler::delete_terreno,
        // Comentarios
        comentarios_handlers::comentario_handler::list_comentarios,
        comentarios_handlers::comentario_handler::create_comentario,
        comentarios_handlers::comentario_handler::update_comentario,
        comentarios_handlers::comentario_handler::delete_comentario,
    ),
    components(
        schemas(
            // Shared
            StatusResponse,
            ErrorResponse,
            // Health
            health_dtos::DbTimeDto,
            // Terrenos
            terrenos_dtos::CreateTerrenoDto,
            terrenos_dtos::UpdateTerrenoDto,
            terrenos_dtos::TerrenoResponseDto,
            terrenos_dtos::TerrenoCreatedDto,
            // Comentarios
            comentarios_dtos::CreateComentarioDto,
            comentarios_dtos::UpdateComentarioDto,
            comentarios_dtos::ComentarioResponseDto,
            comentarios_dtos::ComentarioCreatedDto,
        )
    ),
    tags(
        (name = "health", description = "Liveness and store connectivity checks"),
        (name = "terrenos", description = "Land plot registration and management"),
        (name = "comentarios", description = "Comments attached to a plot"),
    ),
    info(
        title = "AgroVida API",
        version = "0.1.0",
        description = "Land plot and comment API for AgroVida",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
