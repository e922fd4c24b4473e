pub mod comentario;

pub use comentario::Comentario;
