pub mod terreno_service;

pub use terreno_service::TerrenoService;
