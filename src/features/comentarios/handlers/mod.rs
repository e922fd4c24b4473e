pub mod comentario_handler;

pub use comentario_handler::{
    create_comentario, delete_comentario, list_comentarios, update_comentario,
};
