use chrono::{DateTime, Utc};
use sqlx::PgPool;

/// Service for the store connectivity check
pub struct HealthService {
    pool: PgPool,
}

impl HealthService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run a trivial query and return the store's current time.
    /// The raw sqlx error is kept: `/test-db` echoes it to the caller.
    pub async fn db_time(&self) -> Result<DateTime<Utc>, sqlx::Error> {
        sqlx::query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(&self.pool)
            .await
    }
}
