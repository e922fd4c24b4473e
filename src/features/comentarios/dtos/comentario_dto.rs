use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Accepts `terreno_id` as a JSON number or a numeric string; anything that
/// does not convert to an integer fails deserialization (and so the request
/// fails with a 400).
fn deserialize_terreno_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TerrenoId {
        Num(i32),
        Text(String),
    }

    match TerrenoId::deserialize(deserializer)
        .map_err(|_| de::Error::custom("terreno_id must be an integer"))?
    {
        TerrenoId::Num(id) => Ok(id),
        TerrenoId::Text(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| de::Error::custom("terreno_id must be an integer")),
    }
}

/// Request DTO for attaching a comment to a plot
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateComentarioDto {
    #[serde(deserialize_with = "deserialize_terreno_id")]
    #[schema(value_type = i32)]
    pub terreno_id: i32,

    #[validate(length(min = 1, message = "texto must not be empty"))]
    pub texto: String,
}

/// Request DTO for editing a comment's text
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateComentarioDto {
    #[validate(length(min = 1, message = "texto must not be empty"))]
    pub texto: String,
}

/// Response DTO for a stored comment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ComentarioResponseDto {
    pub id: i32,
    pub texto: String,
    pub fecha: DateTime<Utc>,
}

/// Confirmation body for comment creation: `{"status":"ok","id":...,"fecha":...}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ComentarioCreatedDto {
    pub status: String,
    pub id: i32,
    pub fecha: DateTime<Utc>,
}

impl ComentarioCreatedDto {
    pub fn new(id: i32, fecha: DateTime<Utc>) -> Self {
        Self {
            status: "ok".to_string(),
            id,
            fecha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn create_accepts_numeric_terreno_id() {
        let dto: CreateComentarioDto =
            serde_json::from_str(r#"{"terreno_id": 7, "texto": "Buen drenaje"}"#).unwrap();
        assert_eq!(dto.terreno_id, 7);
    }

    #[test]
    fn create_accepts_string_terreno_id() {
        let dto: CreateComentarioDto =
            serde_json::from_str(r#"{"terreno_id": "42", "texto": "Suelo arcilloso"}"#).unwrap();
        assert_eq!(dto.terreno_id, 42);
    }

    #[test]
    fn create_rejects_non_numeric_terreno_id() {
        let result = serde_json::from_str::<CreateComentarioDto>(
            r#"{"terreno_id": "abc", "texto": "Suelo arcilloso"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_missing_terreno_id() {
        let result = serde_json::from_str::<CreateComentarioDto>(r#"{"texto": "Sin terreno"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_rejects_empty_texto() {
        let dto: CreateComentarioDto =
            serde_json::from_str(r#"{"terreno_id": 7, "texto": ""}"#).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn update_rejects_empty_texto() {
        let dto: UpdateComentarioDto = serde_json::from_str(r#"{"texto": ""}"#).unwrap();
        assert!(dto.validate().is_err());
    }
}
