pub mod comentarios;
pub mod health;
pub mod terrenos;
