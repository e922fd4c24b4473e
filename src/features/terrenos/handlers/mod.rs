pub mod terreno_handler;

pub use terreno_handler::{create_terreno, delete_terreno, list_terrenos, update_terreno};
