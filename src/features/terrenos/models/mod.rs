pub mod terreno;

pub use terreno::Terreno;
