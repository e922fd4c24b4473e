use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body for the store connectivity check: `{"status":"ok","db_time":...}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DbTimeDto {
    pub status: String,
    pub db_time: DateTime<Utc>,
}

impl DbTimeDto {
    pub fn new(db_time: DateTime<Utc>) -> Self {
        Self {
            status: "ok".to_string(),
            db_time,
        }
    }
}
