pub mod terreno_dto;

pub use terreno_dto::{CreateTerrenoDto, TerrenoCreatedDto, TerrenoResponseDto, UpdateTerrenoDto};
