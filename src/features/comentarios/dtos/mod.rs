pub mod comentario_dto;

pub use comentario_dto::{
    ComentarioCreatedDto, ComentarioResponseDto, CreateComentarioDto, UpdateComentarioDto,
};
