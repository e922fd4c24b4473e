use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for registering a plot.
///
/// `latitud` and `longitud` are plain required fields: a body missing either
/// key is rejected structurally during deserialization, so `0` remains a
/// perfectly legal coordinate.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTerrenoDto {
    #[validate(length(min = 1, message = "nombre must not be empty"))]
    pub nombre: String,
    pub latitud: f64,
    pub longitud: f64,
}

/// Request DTO for renaming a plot. Coordinates are immutable.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateTerrenoDto {
    #[validate(length(min = 1, message = "nombre must not be empty"))]
    pub nombre: String,
}

/// Response DTO for a stored plot
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TerrenoResponseDto {
    pub id: i32,
    pub nombre: String,
    pub latitud: f64,
    pub longitud: f64,
}

/// Confirmation body for plot creation: `{"status":"ok","id":...}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TerrenoCreatedDto {
    pub status: String,
    pub id: i32,
}

impl TerrenoCreatedDto {
    pub fn new(id: i32) -> Self {
        Self {
            status: "ok".to_string(),
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn create_accepts_zero_coordinates() {
        let dto: CreateTerrenoDto =
            serde_json::from_str(r#"{"nombre":"Parcela Norte","latitud":0,"longitud":0}"#).unwrap();
        assert!(dto.validate().is_ok());
        assert_eq!(dto.latitud, 0.0);
        assert_eq!(dto.longitud, 0.0);
    }

    #[test]
    fn create_rejects_missing_coordinate_key() {
        let result = serde_json::from_str::<CreateTerrenoDto>(
            r#"{"nombre":"Parcela Norte","latitud":4.6}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_missing_nombre_key() {
        let result =
            serde_json::from_str::<CreateTerrenoDto>(r#"{"latitud":4.6,"longitud":-74.1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_empty_nombre() {
        let dto: CreateTerrenoDto =
            serde_json::from_str(r#"{"nombre":"","latitud":4.6,"longitud":-74.1}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_rejects_empty_nombre() {
        let dto: UpdateTerrenoDto = serde_json::from_str(r#"{"nombre":""}"#).unwrap();
        assert!(dto.validate().is_err());
    }
}
